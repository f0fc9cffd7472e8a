use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Space around something: the printable area of a page, the gap around a
/// block, or the padding inside a table cell. Layout never draws into it, but
/// nothing clips content that is explicitly placed there.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
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

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric<V: Into<Pt>, H: Into<Pt>>(vertical: V, horizontal: H) -> Margins {
        let (vertical, horizontal) = (vertical.into(), horizontal.into());
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::default()
    }

    /// `left + right`
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    /// `top + bottom`
    pub fn vertical(&self) -> Pt {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_opposite_sides() {
        let m = Margins::trbl(Pt(1.0), Pt(2.0), Pt(3.0), Pt(4.0));
        assert_eq!(m.horizontal(), Pt(6.0));
        assert_eq!(m.vertical(), Pt(4.0));
        assert_eq!(Margins::symmetric(Pt(5.0), Pt(7.0)).horizontal(), Pt(14.0));
    }

    #[test]
    fn loads_from_json() {
        let m: Margins =
            serde_json::from_str(r#"{"top":10.0,"right":20.0,"bottom":10.0,"left":20.0}"#)
                .expect("valid margins");
        assert_eq!(m, Margins::symmetric(Pt(10.0), Pt(20.0)));
    }
}
