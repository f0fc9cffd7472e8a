//! Flow layout and pagination for PDF documents.
//!
//! Describe content as [`layout::Block`]s, hand them to a
//! [`layout::Paginator`] together with something that can open pages, paint
//! and measure text (a [`Document`] does all three), and write the result out
//! with [`Document::write`].

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Line breaking, table rows, and flowing content across pages
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
