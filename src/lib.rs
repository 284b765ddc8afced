//! A paginating layout engine for reports: flowing paragraphs, `name: value`
//! record blocks and bordered table rows, laid out top to bottom onto pages
//! and rendered to PDF with an embedded TrueType font.
//!
//! A [Report] does the layout and draws through a [Canvas]. [PdfCanvas]
//! produces the PDF; [RecordingCanvas] keeps the drawing in memory.
//!
//! ```no_run
//! use pdf_layout::{compose_report, LayoutConfig, PdfCanvas, Pt, Record, Report, ReportContent};
//!
//! let config = LayoutConfig::new()
//!     .font_family("DejaVu Sans")
//!     .font_path("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf")
//!     .clone();
//! let canvas = PdfCanvas::from_config(&config)?;
//! let mut report = Report::new(canvas, config)?;
//!
//! let content = ReportContent::journal(
//!     vec![Record::new("printer", "hp-2")],
//!     vec![vec!["1".into(), "7".into(), "42".into()]],
//! )
//! .title("Audit journal")
//! .table_font_size(Pt(8.0));
//! compose_report(&mut report, &content)?;
//! report.save("journal.pdf")?;
//! # Ok::<(), pdf_layout::LayoutError>(())
//! ```

pub mod canvas;
pub use canvas::{Canvas, DrawOp, PdfCanvas, RecordingCanvas, TextMeasure};

mod compose;
pub use compose::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::Font;

mod info;
pub use info::*;

pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod report;
pub use report::*;

mod units;
pub use units::*;

/// Re-export of the PDF writer the renderer is built on
pub use pdf_writer;
