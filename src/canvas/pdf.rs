use super::{Canvas, TextMeasure};
use crate::config::LayoutConfig;
use crate::document::Document;
use crate::error::LayoutError;
use crate::font::Font;
use crate::info::Info;
use crate::layout::Margins;
use crate::page::{Page, SpanFont, SpanLayout};
use crate::pagesize::{Orientation, PageSize};
use crate::units::Pt;
use id_arena::Id;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders a report into a PDF [Document] with a single embedded font
pub struct PdfCanvas {
    document: Document,
    font: Id<Font>,
    font_size: Pt,
    line_width: Pt,
    margins: Margins,
    /// Spans of the text region between `begin_text` and `end_text`
    open_text: Option<Vec<SpanLayout>>,
}

impl PdfCanvas {
    /// A canvas drawing everything in `font`. The font is embedded under its
    /// own family name; `config.font_family` is only checked against it.
    pub fn new(font: Font, config: &LayoutConfig) -> PdfCanvas {
        match font.family() {
            Some(family) if family == config.font_family => {}
            family => log::warn!(
                "font family {:?} doesn't match the configured family {:?}",
                family.unwrap_or_default(),
                config.font_family
            ),
        }

        let mut document = Document::default();
        let font = document.add_font(font);
        PdfCanvas {
            document,
            font,
            font_size: config.font_size,
            line_width: config.border_width,
            margins: config.margins,
            open_text: None,
        }
    }

    /// Load the font file named by `config.font_path` and create a canvas with it
    pub fn from_config(config: &LayoutConfig) -> Result<PdfCanvas, LayoutError> {
        let path = config
            .font_path
            .as_ref()
            .ok_or_else(|| LayoutError::Construction("font: no font file configured".to_string()))?;
        let bytes = std::fs::read(path).map_err(|e| {
            LayoutError::Construction(format!("font from {}: {e}", path.display()))
        })?;
        let font = Font::load(bytes)?;
        log::debug!("loaded font {:?} from {}", font.name(), path.display());
        Ok(PdfCanvas::new(font, config))
    }

    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    /// The document drawn so far
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn span(&self, x: Pt, y: Pt, text: &str) -> SpanLayout {
        SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                id: self.font,
                size: self.font_size,
            },
            coords: (x, y),
        }
    }

    fn close_text(&mut self) {
        if let Some(spans) = self.open_text.take() {
            if let Some(page) = self.document.last_page_mut() {
                page.add_text(spans);
            }
        }
    }
}

impl TextMeasure for PdfCanvas {
    fn text_width(&self, text: &str, size: Pt) -> Pt {
        match self.document.fonts.get(self.font) {
            Some(font) => font.width_of_text(text, size),
            None => Pt(0.0),
        }
    }
}

impl Canvas for PdfCanvas {
    fn create_page(
        &mut self,
        size: PageSize,
        orientation: Orientation,
    ) -> Result<PageSize, LayoutError> {
        self.close_text();
        let size = orientation.apply(size);
        if *size.0 <= 0.0 || *size.1 <= 0.0 {
            return Err(LayoutError::Construction(format!(
                "page of {}x{}pt",
                size.0, size.1
            )));
        }
        self.document.add_page(Page::new(size, Some(self.margins)));
        Ok(size)
    }

    fn set_font_and_size(&mut self, size: Pt) {
        self.font_size = size;
    }

    fn set_line_width(&mut self, width: Pt) {
        self.line_width = width;
    }

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        let width = self.line_width;
        match self.document.last_page_mut() {
            Some(page) => page.add_line(width, from, to),
            None => log::warn!("dropping line drawn before the first page"),
        }
    }

    fn begin_text(&mut self) {
        self.close_text();
        self.open_text = Some(Vec::new());
    }

    fn draw_text_at(&mut self, x: Pt, y: Pt, text: &str) {
        let span = self.span(x, y, text);
        match self.open_text.as_mut() {
            Some(spans) => spans.push(span),
            None => {
                log::warn!("text drawn outside a text region: {text:?}");
                match self.document.last_page_mut() {
                    Some(page) => page.add_span(span),
                    None => log::warn!("dropping text drawn before the first page"),
                }
            }
        }
    }

    fn end_text(&mut self) {
        self.close_text();
    }

    fn save(&mut self, path: &Path) -> Result<(), LayoutError> {
        self.close_text();
        let mut file = BufWriter::new(File::create(path)?);
        self.document.write(&mut file)?;
        file.flush()?;
        log::debug!(
            "wrote {} page(s) of PDF to {}",
            self.document.page_count(),
            path.display()
        );
        Ok(())
    }
}
