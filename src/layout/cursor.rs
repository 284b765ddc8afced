use super::Margins;
use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::pagesize::{Orientation, PageSize};
use crate::units::Pt;

/// The current write position on the active page. `y` is a baseline / top edge
/// in page coordinates and shrinks as content is emitted.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Cursor {
    pub x: Pt,
    pub y: Pt,
}

/// Owns the active page's geometry and the cursor on it, and decides when the
/// remaining space is used up and a new page has to be started.
///
/// The active font size lives here as well, since every new page has to have
/// it applied again before any text is drawn on it.
#[derive(Debug, Clone)]
pub struct Paginator {
    cursor: Cursor,
    page: PageSize,
    preset: PageSize,
    orientation: Orientation,
    margins: Margins,
    font_size: Pt,
    pages: usize,
}

impl Paginator {
    /// Create the first page and place the cursor at its top-left margin
    pub fn start<C: Canvas>(canvas: &mut C, config: &LayoutConfig) -> Result<Paginator, LayoutError> {
        let mut paginator = Paginator {
            cursor: Cursor::default(),
            page: config.orientation.apply(config.page_size),
            preset: config.page_size,
            orientation: config.orientation,
            margins: config.margins,
            font_size: config.font_size,
            pages: 0,
        };
        paginator.new_page(canvas)?;
        Ok(paginator)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// (width, height) of the active page
    pub fn page_size(&self) -> PageSize {
        self.page
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    /// Number of pages created so far
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Width between the left and right margins
    pub fn available_width(&self) -> Pt {
        self.margins.content_box(self.page).width()
    }

    /// Height between the top and bottom margins of an empty page
    pub fn writable_height(&self) -> Pt {
        self.margins.content_box(self.page).height()
    }

    /// Make `size` the active font size, now and on every page created later
    pub fn set_font_size<C: Canvas>(&mut self, canvas: &mut C, size: Pt) {
        self.font_size = size;
        canvas.set_font_and_size(size);
    }

    /// Start a new page: reset the cursor to the top-left margin and re-apply
    /// the active font size
    pub fn new_page<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), LayoutError> {
        self.page = canvas.create_page(self.preset, self.orientation)?;
        self.pages += 1;
        self.cursor = Cursor {
            x: self.margins.left,
            y: self.page.1 - self.margins.top,
        };
        canvas.set_font_and_size(self.font_size);
        log::debug!(
            "started page {} ({}x{}pt), cursor at ({}, {})",
            self.pages,
            self.page.0,
            self.page.1,
            self.cursor.x,
            self.cursor.y
        );
        Ok(())
    }

    /// Make sure `required` points fit between the cursor and the bottom
    /// margin, starting one new page if they don't. Returns whether a page was
    /// started. Content that doesn't fit on the fresh page either is a
    /// [LayoutError::PageOverflow]; no further pages are tried.
    pub fn ensure_room<C: Canvas>(
        &mut self,
        canvas: &mut C,
        required: Pt,
    ) -> Result<bool, LayoutError> {
        if self.fits(required) {
            return Ok(false);
        }

        self.new_page(canvas)?;
        if self.fits(required) {
            Ok(true)
        } else {
            Err(LayoutError::PageOverflow {
                required,
                available: self.writable_height(),
            })
        }
    }

    /// Move the cursor down by `dy`
    pub fn advance(&mut self, dy: Pt) {
        self.cursor.y -= dy;
    }

    fn fits(&self, required: Pt) -> bool {
        self.cursor.y - required >= self.margins.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, RecordingCanvas};

    fn small_page() -> LayoutConfig {
        LayoutConfig::new()
            .page_size((Pt(200.0), Pt(300.0)))
            .margins(Margins::all(Pt(20.0)))
            .clone()
    }

    #[test]
    fn starts_at_the_top_left_margin() {
        let mut canvas = RecordingCanvas::default();
        let paginator = Paginator::start(&mut canvas, &small_page()).unwrap();
        assert_eq!(paginator.cursor(), Cursor { x: Pt(20.0), y: Pt(280.0) });
        assert_eq!(paginator.available_width(), Pt(160.0));
        assert_eq!(paginator.writable_height(), Pt(260.0));
        assert_eq!(paginator.page_count(), 1);
        assert_eq!(
            canvas.ops,
            vec![
                DrawOp::NewPage { width: Pt(200.0), height: Pt(300.0) },
                DrawOp::FontSize(Pt(14.0)),
            ]
        );
    }

    #[test]
    fn room_left_means_no_new_page() {
        let mut canvas = RecordingCanvas::default();
        let mut paginator = Paginator::start(&mut canvas, &small_page()).unwrap();
        paginator.advance(Pt(100.0));
        assert!(!paginator.ensure_room(&mut canvas, Pt(160.0)).unwrap());
        assert_eq!(paginator.page_count(), 1);
        assert_eq!(paginator.cursor().y, Pt(180.0));
    }

    #[test]
    fn not_enough_room_starts_exactly_one_page() {
        let mut canvas = RecordingCanvas::default();
        let mut paginator = Paginator::start(&mut canvas, &small_page()).unwrap();
        paginator.advance(Pt(255.0));
        paginator.set_font_size(&mut canvas, Pt(9.0));

        assert!(paginator.ensure_room(&mut canvas, Pt(20.0)).unwrap());
        assert_eq!(paginator.page_count(), 2);
        assert_eq!(paginator.cursor(), Cursor { x: Pt(20.0), y: Pt(280.0) });
        // the active size is re-applied on the new page
        assert_eq!(canvas.current_page_ops(), &[DrawOp::FontSize(Pt(9.0))]);
    }

    #[test]
    fn content_taller_than_a_page_overflows_after_one_retry() {
        let mut canvas = RecordingCanvas::default();
        let mut paginator = Paginator::start(&mut canvas, &small_page()).unwrap();
        let err = paginator.ensure_room(&mut canvas, Pt(261.0)).unwrap_err();
        match err {
            LayoutError::PageOverflow { required, available } => {
                assert_eq!(required, Pt(261.0));
                assert_eq!(available, Pt(260.0));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(paginator.page_count(), 2);
    }

    #[test]
    fn page_creation_failure_propagates() {
        let mut canvas = RecordingCanvas::default().with_page_limit(1);
        let mut paginator = Paginator::start(&mut canvas, &small_page()).unwrap();
        paginator.advance(Pt(270.0));
        let err = paginator.ensure_room(&mut canvas, Pt(0.0)).unwrap_err();
        assert!(matches!(err, LayoutError::Construction(_)));
    }

    #[test]
    fn landscape_pages_swap_dimensions() {
        let mut canvas = RecordingCanvas::default();
        let config = small_page().orientation(Orientation::Landscape).clone();
        let paginator = Paginator::start(&mut canvas, &config).unwrap();
        assert_eq!(paginator.page_size(), (Pt(300.0), Pt(200.0)));
        assert_eq!(paginator.available_width(), Pt(260.0));
    }
}
