use crate::units::*;

/// An axis-aligned rectangle in page space, specified by its lower-left
/// (`x1`, `y1`) and upper-right (`x2`, `y2`) corners. PDF page space has its
/// origin at the bottom-left of the page with y growing upwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x1: Pt,
    pub y1: Pt,
    pub x2: Pt,
    pub y2: Pt,
}

impl Rect {
    /// Build a rectangle hanging down from its top-left corner, which is how
    /// layout thinks about boxes (the cursor sits at the top of the next box)
    pub fn from_top_left(x: Pt, top: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: x,
            y1: top - height,
            x2: x + width,
            y2: top,
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
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}
