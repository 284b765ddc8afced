use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;

/// Blank space kept clear around the edge of every page. The cursor starts at
/// `height - top`, text starts at `left`, and content never goes below `bottom`.
/// Tables span from `left` to `width - right`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// The area of a page of the given size that lies inside these margins
    pub fn content_box(&self, size: PageSize) -> Rect {
        Rect {
            x1: self.left,
            y1: self.bottom,
            x2: size.0 - self.right,
            y2: size.1 - self.top,
        }
    }
}
