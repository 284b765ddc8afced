use crate::layout::Margins;
use crate::pagesize::{self, Orientation, PageSize};
use crate::units::Pt;
use std::path::PathBuf;

/// Fixed layout settings for a [Report](crate::Report). Everything here is
/// chosen once, when the report is created, and is not changed per call.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Family name the document font is expected to have. A font file with a
    /// different family is still used, with a warning.
    pub font_family: String,
    /// TrueType / OpenType file loaded by [PdfCanvas::from_config](crate::PdfCanvas::from_config)
    pub font_path: Option<PathBuf>,
    /// Size of paragraph and record text
    pub font_size: Pt,
    /// Size used by [compose_report](crate::compose_report) for table rows
    pub table_font_size: Pt,
    /// Extra space between two lines of flowing text, on top of the font size
    pub line_spacing: Pt,
    pub margins: Margins,
    /// Stroke width of table cell borders
    pub border_width: Pt,
    /// Space between a cell border and its text, on both the left and the right
    pub cell_padding: Pt,
    pub page_size: PageSize,
    pub orientation: Orientation,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            font_family: "Times-Roman".to_string(),
            font_path: None,
            font_size: Pt(14.0),
            table_font_size: Pt(10.0),
            line_spacing: Pt(15.0),
            margins: Margins::all(Pt(20.0)),
            border_width: Pt(1.0),
            cell_padding: Pt(5.0),
            page_size: pagesize::A4,
            orientation: Orientation::Portrait,
        }
    }
}

impl LayoutConfig {
    /// Create a configuration with all the defaults
    pub fn new() -> LayoutConfig {
        LayoutConfig::default()
    }

    pub fn font_family<S: ToString>(&mut self, family: S) -> &mut Self {
        self.font_family = family.to_string();
        self
    }

    pub fn font_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn font_size<D: Into<Pt>>(&mut self, size: D) -> &mut Self {
        self.font_size = size.into();
        self
    }

    pub fn table_font_size<D: Into<Pt>>(&mut self, size: D) -> &mut Self {
        self.table_font_size = size.into();
        self
    }

    pub fn line_spacing<D: Into<Pt>>(&mut self, spacing: D) -> &mut Self {
        self.line_spacing = spacing.into();
        self
    }

    pub fn margins(&mut self, margins: Margins) -> &mut Self {
        self.margins = margins;
        self
    }

    pub fn border_width<D: Into<Pt>>(&mut self, width: D) -> &mut Self {
        self.border_width = width.into();
        self
    }

    pub fn cell_padding<D: Into<Pt>>(&mut self, padding: D) -> &mut Self {
        self.cell_padding = padding.into();
        self
    }

    pub fn page_size(&mut self, size: PageSize) -> &mut Self {
        self.page_size = size;
        self
    }

    pub fn orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.orientation = orientation;
        self
    }

    /// Vertical distance between the baselines of two consecutive lines of flowing text
    pub fn line_advance(&self) -> Pt {
        self.font_size + self.line_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_report_layout() {
        let config = LayoutConfig::default();
        assert_eq!(config.font_family, "Times-Roman");
        assert_eq!(config.font_size, Pt(14.0));
        assert_eq!(config.line_advance(), Pt(29.0));
        assert_eq!(config.margins, Margins::all(Pt(20.0)));
        assert_eq!(config.page_size, pagesize::A4);
    }

    #[test]
    fn setters_chain() {
        let config = LayoutConfig::new()
            .font_size(Pt(10.0))
            .line_spacing(Pt(2.0))
            .cell_padding(Pt(3.0))
            .orientation(Orientation::Landscape)
            .clone();
        assert_eq!(config.line_advance(), Pt(12.0));
        assert_eq!(config.cell_padding, Pt(3.0));
        assert_eq!(config.orientation, Orientation::Landscape);
    }
}
