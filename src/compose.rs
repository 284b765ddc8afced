//! Putting whole documents together out of the four basic report operations.

use crate::canvas::Canvas;
use crate::error::LayoutError;
use crate::report::{Record, Report};
use crate::units::Pt;
use std::path::Path;

/// Column titles of an audit-journal export
pub const JOURNAL_COLUMNS: [&str; 9] = [
    "integrity_id",
    "type_id",
    "journal_id",
    "time",
    "result",
    "info",
    "object",
    "printer",
    "user_name",
];

/// Anything that content can be appended to, a page at a time
pub trait ReportSink {
    fn add_paragraph(&mut self, text: &str) -> Result<(), LayoutError>;

    fn add_record_block(&mut self, records: &[Record]) -> Result<(), LayoutError>;

    fn add_table_row(&mut self, font_size: Pt, fields: &[String]) -> Result<(), LayoutError>;

    /// Size of table rows whose content doesn't ask for one
    fn table_font_size(&self) -> Pt;

    fn save(self, path: &Path) -> Result<(), LayoutError>
    where
        Self: Sized;
}

impl<C: Canvas> ReportSink for Report<C> {
    fn add_paragraph(&mut self, text: &str) -> Result<(), LayoutError> {
        Report::add_paragraph(self, text)
    }

    fn add_record_block(&mut self, records: &[Record]) -> Result<(), LayoutError> {
        Report::add_record_block(self, records)
    }

    fn add_table_row(&mut self, font_size: Pt, fields: &[String]) -> Result<(), LayoutError> {
        Report::add_table_row(self, font_size, fields)
    }

    fn table_font_size(&self) -> Pt {
        self.config().table_font_size
    }

    fn save(self, path: &Path) -> Result<(), LayoutError> {
        Report::save(self, path)
    }
}

/// The parts of a typical report: an optional title, a block of header
/// records, then a table with a row of column titles followed by data rows
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReportContent {
    pub title: Option<String>,
    pub records: Vec<Record>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Overrides the sink's table font size when set
    pub table_font_size: Option<Pt>,
}

impl ReportContent {
    /// Content for an audit-journal export, titled with [JOURNAL_COLUMNS]
    pub fn journal(records: Vec<Record>, rows: Vec<Vec<String>>) -> ReportContent {
        ReportContent {
            title: None,
            records,
            columns: JOURNAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
            table_font_size: None,
        }
    }

    pub fn title<S: ToString>(mut self, title: S) -> ReportContent {
        self.title = Some(title.to_string());
        self
    }

    pub fn table_font_size<D: Into<Pt>>(mut self, size: D) -> ReportContent {
        self.table_font_size = Some(size.into());
        self
    }
}

/// Lays out `content` in order: title, records, column titles, rows. Parts
/// that are empty are left out. Rows use the content's table font size, or
/// the sink's if the content has none.
pub fn compose_report<S: ReportSink>(sink: &mut S, content: &ReportContent) -> Result<(), LayoutError> {
    let table_font_size = content
        .table_font_size
        .unwrap_or_else(|| sink.table_font_size());

    if let Some(title) = &content.title {
        sink.add_paragraph(title)?;
    }

    sink.add_record_block(&content.records)?;

    if !content.columns.is_empty() {
        sink.add_table_row(table_font_size, &content.columns)?;
    }

    for row in content.rows.iter() {
        sink.add_table_row(table_font_size, row)?;
    }

    Ok(())
}

/// [compose_report] followed by saving to `path`
pub fn write_report<S: ReportSink>(
    mut sink: S,
    content: &ReportContent,
    path: &Path,
) -> Result<(), LayoutError> {
    compose_report(&mut sink, content)?;
    sink.save(path)
}
