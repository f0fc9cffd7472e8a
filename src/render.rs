//! The seams between layout and whatever turns laid-out content into pages.
//!
//! Layout only ever talks to a [`PageFactory`] (to open pages) and a
//! [`Renderer`] (to paint finished content), and it only calls them once every
//! coordinate of a block is final. [`Document`](crate::Document) implements
//! both by recording the calls onto its pages.

use crate::colour::{colours, Colour};
use crate::font::FontId;
use crate::image::Image;
use crate::layout::PageGeometry;
use crate::page::Page;
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;

pub type PageId = Id<Page>;
pub type ImageId = Id<Image>;

/// How a run of text is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPaint {
    pub font: FontId,
    pub size: Pt,
    pub colour: Colour,
    /// Extra space added after every glyph
    pub character_spacing: Pt,
    /// Counter-clockwise rotation about the text origin, in radians
    pub rotation: f32,
}

/// How a line or an outline is stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub colour: Colour,
    pub width: Pt,
}

impl Stroke {
    pub fn new<P: Into<Pt>>(colour: Colour, width: P) -> Stroke {
        Stroke {
            colour,
            width: width.into(),
        }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Stroke {
            colour: colours::BLACK,
            width: Pt(1.0),
        }
    }
}

/// How a rectangle is painted. Fill is painted before the outline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectPaint {
    pub fill: Option<Colour>,
    pub stroke: Option<Stroke>,
}

/// Creates pages on demand. Called exactly once per page break.
pub trait PageFactory {
    fn new_page(&mut self, geometry: PageGeometry) -> PageId;
}

/// Paints finished content onto a page. All coordinates are in page space:
/// origin at the bottom-left, y growing upwards, text positioned by its
/// baseline origin.
pub trait Renderer {
    fn draw_text(&mut self, page: PageId, origin: (Pt, Pt), text: &str, paint: &TextPaint);
    fn draw_line(&mut self, page: PageId, from: (Pt, Pt), to: (Pt, Pt), stroke: &Stroke);
    fn draw_rect(&mut self, page: PageId, rect: Rect, paint: &RectPaint);
    fn draw_image(&mut self, page: PageId, image: ImageId, rect: Rect);
}
