//! The layout engine: everything that decides *where* things go.
//!
//! - [Paginator] owns the cursor and starts new pages when the remaining space
//!   runs out
//! - [wrap_text] / [flow_text] break free text into lines that fit between the
//!   margins and stream them down the page
//! - [plan_row] / [draw_row] size a table row from its fields and draw its cell
//!   grid and text
//!
//! The planning functions ([wrap_text], [plan_row]) are pure and take the text
//! measurement as a closure; the drawing functions take a
//! [Canvas](crate::canvas::Canvas).
//!
//! ```
//! use pdf_layout::layout::wrap_text;
//! use pdf_layout::Pt;
//!
//! let lines = wrap_text("The quick brown fox", Pt(7.0), |s| Pt(s.chars().count() as f32));
//! assert_eq!(lines, vec!["The", "quick", "brown", "fox"]);
//! ```

mod cursor;
mod margins;
mod table;
mod text;

pub use cursor::*;
pub use margins::*;
pub use table::*;
pub use text::*;
