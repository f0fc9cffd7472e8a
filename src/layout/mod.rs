//! Flow layout and pagination.
//!
//! Content is described as a list of [`Block`]s and handed to a
//! [`Paginator`], which breaks text into lines, sizes table rows, decides where
//! pages end and paints everything through a [`Renderer`](crate::Renderer)
//! once its position is final.
//!
//! # Example
//!
//! ```
//! use pdf_flow::layout::{
//!     Block, Margins, PageGeometry, PageSetup, Paginator, Paragraph, ResolvedStyle,
//! };
//! use pdf_flow::{
//!     pagesize, Document, FontId, FontMetrics, ImageId, Monospace, PageFactory, PageId, Pt,
//!     Rect, RectPaint, Renderer, Stroke, TextPaint,
//! };
//!
//! // lay out against fixed-width metrics, keeping only the pages
//! struct Preview {
//!     doc: Document,
//!     metrics: Monospace,
//! }
//!
//! impl PageFactory for Preview {
//!     fn new_page(&mut self, geometry: PageGeometry) -> PageId {
//!         self.doc.new_page(geometry)
//!     }
//! }
//!
//! impl Renderer for Preview {
//!     fn draw_text(&mut self, _: PageId, _: (Pt, Pt), _: &str, _: &TextPaint) {}
//!     fn draw_line(&mut self, _: PageId, _: (Pt, Pt), _: (Pt, Pt), _: &Stroke) {}
//!     fn draw_rect(&mut self, _: PageId, _: Rect, _: &RectPaint) {}
//!     fn draw_image(&mut self, _: PageId, _: ImageId, _: Rect) {}
//! }
//!
//! impl FontMetrics for Preview {
//!     fn text_width(&self, font: FontId, text: &str, size: Pt) -> Pt {
//!         self.metrics.text_width(font, text, size)
//!     }
//!     fn ascent(&self, font: FontId, size: Pt) -> Pt {
//!         self.metrics.ascent(font, size)
//!     }
//!     fn descent(&self, font: FontId, size: Pt) -> Pt {
//!         self.metrics.descent(font, size)
//!     }
//! }
//!
//! let mut preview = Preview {
//!     doc: Document::default(),
//!     metrics: Monospace::new(Pt(6.0)),
//! };
//! let setup = PageSetup::new(pagesize::LETTER, ResolvedStyle::new(FontId(0), Pt(12.0)))
//!     .with_margins(Margins::all(Pt(72.0)));
//!
//! let flow = Paginator::new(&mut preview, setup)
//!     .run(vec![Block::Paragraph(Paragraph::new("Hello, world!"))])
//!     .expect("fits on a page");
//! assert_eq!(flow.pages.len(), 1);
//! assert_eq!(preview.doc.page_count(), 1);
//! ```

mod cursor;
mod margins;
mod page_break;
mod paginate;
mod style;
mod table;
mod text;

pub use cursor::*;
pub use margins::*;
pub use page_break::*;
pub use paginate::*;
pub use style::*;
pub use table::*;
pub use text::*;
