use super::{Canvas, TextMeasure};
use crate::error::LayoutError;
use crate::pagesize::{Orientation, PageSize};
use crate::units::Pt;
use std::path::{Path, PathBuf};

/// A single instruction received by a [RecordingCanvas]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    NewPage { width: Pt, height: Pt },
    FontSize(Pt),
    LineWidth(Pt),
    Line { from: (Pt, Pt), to: (Pt, Pt) },
    BeginText,
    Text { x: Pt, y: Pt, text: String },
    EndText,
    Save(PathBuf),
}

/// An in-memory canvas with monospaced metrics: every codepoint is
/// `advance × size` wide. It records what was drawn instead of rendering it.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    /// Width of one codepoint as a fraction of the font size
    pub advance: f32,
    /// Everything drawn so far, in order
    pub ops: Vec<DrawOp>,
    page_limit: Option<usize>,
    pages: usize,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        RecordingCanvas::new(0.5)
    }
}

impl RecordingCanvas {
    pub fn new(advance: f32) -> RecordingCanvas {
        RecordingCanvas {
            advance,
            ops: Vec::new(),
            page_limit: None,
            pages: 0,
        }
    }

    /// Refuse to create more than `limit` pages, the way a renderer that ran
    /// out of resources would
    pub fn with_page_limit(mut self, limit: usize) -> RecordingCanvas {
        self.page_limit = Some(limit);
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Text runs drawn so far, with their baseline positions
    pub fn texts(&self) -> Vec<(Pt, Pt, &str)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, y, text } => Some((*x, *y, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Line segments drawn so far
    pub fn lines(&self) -> Vec<((Pt, Pt), (Pt, Pt))> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Ops drawn after the most recent page was created
    pub fn current_page_ops(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::NewPage { .. }))
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.ops[start..]
    }
}

impl TextMeasure for RecordingCanvas {
    fn text_width(&self, text: &str, size: Pt) -> Pt {
        size * (self.advance * text.chars().count() as f32)
    }
}

impl Canvas for RecordingCanvas {
    fn create_page(
        &mut self,
        size: PageSize,
        orientation: Orientation,
    ) -> Result<PageSize, LayoutError> {
        if self.page_limit.is_some_and(|limit| self.pages >= limit) {
            return Err(LayoutError::Construction(format!(
                "page {} (limit reached)",
                self.pages + 1
            )));
        }

        let (width, height) = orientation.apply(size);
        self.pages += 1;
        self.ops.push(DrawOp::NewPage { width, height });
        Ok((width, height))
    }

    fn set_font_and_size(&mut self, size: Pt) {
        self.ops.push(DrawOp::FontSize(size));
    }

    fn set_line_width(&mut self, width: Pt) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        self.ops.push(DrawOp::Line { from, to });
    }

    fn begin_text(&mut self) {
        self.ops.push(DrawOp::BeginText);
    }

    fn draw_text_at(&mut self, x: Pt, y: Pt, text: &str) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn end_text(&mut self) {
        self.ops.push(DrawOp::EndText);
    }

    fn save(&mut self, path: &Path) -> Result<(), LayoutError> {
        self.ops.push(DrawOp::Save(path.to_path_buf()));
        Ok(())
    }
}
