use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::layout::{self, Cursor, Paginator};
use crate::units::Pt;
use std::fmt;
use std::path::Path;

/// One named value in a record block, drawn as `name: value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub value: String,
}

impl Record {
    pub fn new<N: ToString, V: ToString>(name: N, value: V) -> Record {
        Record {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

impl<N: ToString, V: ToString> From<(N, V)> for Record {
    fn from((name, value): (N, V)) -> Self {
        Record::new(name, value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// A paginated document being laid out onto a [Canvas].
///
/// A report owns the canvas it draws on, the cursor on the current page, and
/// the [LayoutConfig] it was created with. Content is appended top to bottom;
/// new pages are started automatically. Once an operation has drawn something
/// it is never revisited.
///
/// ```
/// use pdf_layout::{LayoutConfig, RecordingCanvas, Record, Report, Pt};
///
/// let mut report = Report::new(RecordingCanvas::default(), LayoutConfig::default())?;
/// report.add_paragraph("Quarterly audit journal")?;
/// report.add_record_block(&[Record::new("printer", "hp-2")])?;
/// report.add_table_row(Pt(10.0), &["time", "user_name"])?;
/// assert_eq!(report.page_count(), 1);
/// # Ok::<(), pdf_layout::LayoutError>(())
/// ```
pub struct Report<C: Canvas> {
    canvas: C,
    paginator: Paginator,
    config: LayoutConfig,
}

impl<C: Canvas> Report<C> {
    /// Start a report, creating its first page. Fails if the canvas can't
    /// create a page.
    pub fn new(mut canvas: C, config: LayoutConfig) -> Result<Report<C>, LayoutError> {
        let paginator = Paginator::start(&mut canvas, &config)?;
        Ok(Report {
            canvas,
            paginator,
            config,
        })
    }

    /// Flow a paragraph of text in the body font. Empty text is ignored.
    pub fn add_paragraph(&mut self, text: &str) -> Result<(), LayoutError> {
        layout::flow_text(&mut self.paginator, &mut self.canvas, &self.config, text)
    }

    /// Flow each record as its own `name: value` paragraph. An empty block is
    /// ignored.
    pub fn add_record_block(&mut self, records: &[Record]) -> Result<(), LayoutError> {
        for record in records {
            self.add_paragraph(&record.to_string())?;
        }
        Ok(())
    }

    /// Draw a single table row with one equally-wide column per field. The
    /// row grows to fit fields that have to wrap. A row without fields is
    /// ignored.
    pub fn add_table_row<S: AsRef<str>>(
        &mut self,
        font_size: Pt,
        fields: &[S],
    ) -> Result<(), LayoutError> {
        layout::draw_row(
            &mut self.paginator,
            &mut self.canvas,
            &self.config,
            font_size,
            fields,
        )?;
        Ok(())
    }

    /// Draw several rows in order, stopping at the first failure
    pub fn add_table_rows<R: AsRef<[S]>, S: AsRef<str>>(
        &mut self,
        font_size: Pt,
        rows: &[R],
    ) -> Result<(), LayoutError> {
        for row in rows {
            self.add_table_row(font_size, row.as_ref())?;
        }
        Ok(())
    }

    /// Write the finished document to `path`. This is the last thing a report
    /// does.
    pub fn save<P: AsRef<Path>>(mut self, path: P) -> Result<(), LayoutError> {
        let path = path.as_ref();
        self.canvas.save(path)?;
        log::info!(
            "saved {} page(s) to {}",
            self.paginator.page_count(),
            path.display()
        );
        Ok(())
    }

    pub fn cursor(&self) -> Cursor {
        self.paginator.cursor()
    }

    pub fn page_count(&self) -> usize {
        self.paginator.page_count()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Stop laying out and take the canvas back, e.g. to inspect what was drawn
    pub fn into_canvas(self) -> C {
        self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, RecordingCanvas};
    use crate::layout::Margins;

    fn report() -> Report<RecordingCanvas> {
        let config = LayoutConfig::new()
            .page_size((Pt(200.0), Pt(200.0)))
            .margins(Margins::all(Pt(20.0)))
            .font_size(Pt(10.0))
            .line_spacing(Pt(5.0))
            .clone();
        Report::new(RecordingCanvas::new(0.5), config).unwrap()
    }

    #[test]
    fn records_render_as_name_value_lines() {
        let mut report = report();
        report
            .add_record_block(&[Record::new("time", "12:00"), ("result", "ok").into()])
            .unwrap();
        let canvas = report.into_canvas();
        assert_eq!(
            canvas.texts(),
            vec![
                (Pt(20.0), Pt(180.0), "time: 12:00"),
                (Pt(20.0), Pt(165.0), "result: ok"),
            ]
        );
    }

    #[test]
    fn degenerate_input_is_a_no_op() {
        let mut report = report();
        let before = report.canvas().ops.len();
        report.add_paragraph("").unwrap();
        report.add_record_block(&[]).unwrap();
        report.add_table_row::<&str>(Pt(10.0), &[]).unwrap();
        assert_eq!(report.canvas().ops.len(), before);
        assert_eq!(report.cursor().y, Pt(180.0));
    }

    #[test]
    fn paragraphs_and_rows_share_the_cursor() {
        let mut report = report();
        report.add_paragraph("intro").unwrap();
        assert_eq!(report.cursor().y, Pt(165.0));
        report.add_table_row(Pt(8.0), &["a", "b"]).unwrap();
        assert_eq!(report.cursor().y, Pt(149.0));
        // the table size doesn't leak into the next paragraph
        report.add_paragraph("outro").unwrap();
        let ops = &report.canvas().ops;
        let last_size = ops.iter().rev().find_map(|op| match op {
            DrawOp::FontSize(size) => Some(*size),
            _ => None,
        });
        assert_eq!(last_size, Some(Pt(10.0)));
    }

    #[test]
    fn add_table_rows_draws_each_row() {
        let mut report = report();
        let rows = vec![vec!["a".to_string()], vec!["b".to_string()], vec!["c".to_string()]];
        report.add_table_rows(Pt(10.0), &rows).unwrap();
        assert_eq!(report.cursor().y, Pt(120.0));
    }

    #[test]
    fn save_is_forwarded_to_the_canvas() {
        let mut canvas = RecordingCanvas::default();
        let mut report = Report::new(&mut canvas, LayoutConfig::default()).unwrap();
        report.add_paragraph("done").unwrap();
        report.save("out.pdf").unwrap();
        assert_eq!(canvas.ops.last(), Some(&DrawOp::Save("out.pdf".into())));
    }

    #[test]
    fn construction_failure_surfaces() {
        let canvas = RecordingCanvas::default().with_page_limit(0);
        let err = Report::new(canvas, LayoutConfig::default()).err().unwrap();
        assert!(matches!(err, LayoutError::Construction(_)));
    }
}
