use crate::units::Pt;
use thiserror::Error;

/// Errors raised while flowing content onto pages. None of these are
/// transient: retrying the same layout yields the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A single glyph (or an atomic block) is wider than the width it was
    /// given. Either shrink the font or widen the block.
    #[error("a width of {width} cannot hold a single glyph at font size {size}")]
    WidthTooSmall { width: Pt, size: Pt },

    /// Nothing could be placed on a freshly started page, so paginating
    /// further would never terminate
    #[error("no content fits on fresh page {page}")]
    ZeroProgress { page: usize },

    /// Splitting a table row lost, duplicated, or reordered lines
    #[error("row split of cell {cell} kept {kept} and continued {continued} of {total} lines")]
    InconsistentRowSplit {
        cell: usize,
        kept: usize,
        continued: usize,
        total: usize,
    },
}

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode the image
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// Content could not be laid out
    Layout(#[from] LayoutError),

    #[error("page is missing from the document")]
    /// A page in the page order no longer exists in the page arena
    PageMissing,
}
