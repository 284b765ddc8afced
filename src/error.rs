use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FontParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("failed to create {0}")]
    /// The renderer could not create the document, a page, or load a font
    Construction(String),

    #[error("content exceeds a full page: needs {required}pt, a fresh page offers {available}pt")]
    /// Content did not fit even on a freshly created, empty page
    PageOverflow {
        /// Height the content asked for
        required: Pt,
        /// Writable height of an empty page
        available: Pt,
    },

    #[error("page is missing from the document")]
    /// A page listed in the page order could not be found when writing
    PageMissing,
}
