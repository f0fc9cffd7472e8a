use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// The size of a page. Fixed once the page has been opened.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: Pt,
    pub height: Pt,
}

impl PageGeometry {
    pub const fn new(width: Pt, height: Pt) -> PageGeometry {
        PageGeometry { width, height }
    }

    /// The same page turned so that `width <= height`
    pub fn portrait(self) -> PageGeometry {
        if self.width <= self.height {
            self
        } else {
            PageGeometry::new(self.height, self.width)
        }
    }

    /// The same page turned so that `width >= height`
    pub fn landscape(self) -> PageGeometry {
        if self.width >= self.height {
            self
        } else {
            PageGeometry::new(self.height, self.width)
        }
    }
}

/// The last known write position on the current page, in page space.
///
/// Either coordinate may be unknown, in which case layout derives it from the
/// page top and margins. A cursor only ever describes one page: it is reset
/// whenever a new page is started.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Cursor {
    pub x: Option<Pt>,
    pub y: Option<Pt>,
}

impl Cursor {
    /// A cursor with no established position
    pub fn unset() -> Cursor {
        Cursor::default()
    }

    pub fn at(x: Pt, y: Pt) -> Cursor {
        Cursor {
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn x_or(&self, left: Pt) -> Pt {
        self.x.unwrap_or(left)
    }

    pub fn y_or(&self, top: Pt) -> Pt {
        self.y.unwrap_or(top)
    }

    pub fn move_to(&mut self, x: Pt, y: Pt) {
        self.x = Some(x);
        self.y = Some(y);
    }

    pub fn reset(&mut self) {
        *self = Cursor::unset();
    }
}
