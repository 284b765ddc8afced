use crate::pagesize::PageSize;
use crate::units::Pt;

/// An axis-aligned box in page coordinates, lower-left corner first
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x1: Pt,
    pub y1: Pt,
    pub x2: Pt,
    pub y2: Pt,
}

impl Rect {
    /// The whole of a page of the given size
    pub fn page(size: PageSize) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: size.0,
            y2: size.1,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect::new(*r.x1, *r.y1, *r.x2, *r.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_box_starts_at_the_origin() {
        let rect = Rect::page((Pt(100.0), Pt(50.0)));
        assert_eq!(rect.width(), Pt(100.0));
        assert_eq!(rect.height(), Pt(50.0));
        let pdf: pdf_writer::Rect = rect.into();
        assert_eq!((pdf.x1, pdf.y1, pdf.x2, pdf.y2), (0.0, 0.0, 100.0, 50.0));
    }
}
