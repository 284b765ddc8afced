//! The two ports the layout engine draws through.
//!
//! [TextMeasure] answers "how wide is this string", [Canvas] takes the marks.
//! The engine never talks to a renderer any other way, so any backend that
//! implements both traits can receive a [Report](crate::Report):
//!
//! - [PdfCanvas] renders into an embedded-font PDF
//! - [RecordingCanvas] keeps a list of [DrawOp]s in memory with fixed-width
//!   metrics, which is what the tests and layout previews use
//!
//! `&mut C` is a canvas too, so a report can draw onto a canvas it doesn't own.

use crate::error::LayoutError;
use crate::pagesize::{Orientation, PageSize};
use crate::units::Pt;
use std::path::Path;

mod pdf;
pub use pdf::*;

mod recording;
pub use recording::*;

/// Measures text in the renderer's active font
pub trait TextMeasure {
    /// Rendered width of `text` at `size`
    fn text_width(&self, text: &str, size: Pt) -> Pt;
}

/// Receives the drawing instructions produced by layout. All coordinates are
/// page coordinates in points with the origin at the bottom-left corner.
pub trait Canvas: TextMeasure {
    /// Start a new page; all following marks go to it. Returns the actual
    /// (width, height) of the page.
    fn create_page(
        &mut self,
        size: PageSize,
        orientation: Orientation,
    ) -> Result<PageSize, LayoutError>;

    /// Select the size of the active font for following text
    fn set_font_and_size(&mut self, size: Pt);

    /// Stroke width of following lines
    fn set_line_width(&mut self, width: Pt);

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt));

    fn begin_text(&mut self);

    /// Place a run of text with its baseline starting at `(x, y)`
    fn draw_text_at(&mut self, x: Pt, y: Pt, text: &str);

    fn end_text(&mut self);

    /// Write the finished document. Called once, after all layout is done.
    fn save(&mut self, path: &Path) -> Result<(), LayoutError>;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &mut T {
    fn text_width(&self, text: &str, size: Pt) -> Pt {
        (**self).text_width(text, size)
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn create_page(
        &mut self,
        size: PageSize,
        orientation: Orientation,
    ) -> Result<PageSize, LayoutError> {
        (**self).create_page(size, orientation)
    }

    fn set_font_and_size(&mut self, size: Pt) {
        (**self).set_font_and_size(size)
    }

    fn set_line_width(&mut self, width: Pt) {
        (**self).set_line_width(width)
    }

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        (**self).draw_line(from, to)
    }

    fn begin_text(&mut self) {
        (**self).begin_text()
    }

    fn draw_text_at(&mut self, x: Pt, y: Pt, text: &str) {
        (**self).draw_text_at(x, y, text)
    }

    fn end_text(&mut self) {
        (**self).end_text()
    }

    fn save(&mut self, path: &Path) -> Result<(), LayoutError> {
        (**self).save(path)
    }
}
