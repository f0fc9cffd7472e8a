//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width ≤ height), except
//! [`LEDGER`] which is tabloid turned sideways. Use
//! [`PageGeometry::landscape`] and [`PageGeometry::portrait`] to turn them.
//!
//! # Example
//!
//! ```
//! use pdf_flow::pagesize::{A4, LETTER};
//!
//! assert!(LETTER.height > LETTER.width);
//! let landscape = A4.landscape();
//! assert!(landscape.width > landscape.height);
//! ```

use crate::layout::PageGeometry;
use crate::units::*;

// north american sizes
pub const LETTER: PageGeometry = PageGeometry::new(Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const HALF_LETTER: PageGeometry = PageGeometry::new(Pt(5.5 * 72.0), Pt(8.5 * 72.0));
pub const JUNIOR_LEGAL: PageGeometry = PageGeometry::new(Pt(5.0 * 72.0), Pt(8.0 * 72.0));
pub const LEGAL: PageGeometry = PageGeometry::new(Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const TABLOID: PageGeometry = PageGeometry::new(Pt(11.0 * 72.0), Pt(17.0 * 72.0));
pub const LEDGER: PageGeometry = PageGeometry::new(Pt(17.0 * 72.0), Pt(11.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A0: PageGeometry = PageGeometry::new(Pt(841.0 * 72.0 / 25.4), Pt(1189.0 * 72.0 / 25.4));
pub const A1: PageGeometry = PageGeometry::new(Pt(594.0 * 72.0 / 25.4), Pt(841.0 * 72.0 / 25.4));
pub const A2: PageGeometry = PageGeometry::new(Pt(420.0 * 72.0 / 25.4), Pt(594.0 * 72.0 / 25.4));
pub const A3: PageGeometry = PageGeometry::new(Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageGeometry = PageGeometry::new(Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageGeometry = PageGeometry::new(Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
pub const A6: PageGeometry = PageGeometry::new(Pt(105.0 * 72.0 / 25.4), Pt(148.0 * 72.0 / 25.4));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_in_points() {
        assert!((*A4.width - 595.27).abs() < 0.01);
        assert!((*A4.height - 841.89).abs() < 0.01);
        assert_eq!(LEDGER, TABLOID.landscape());
    }
}
