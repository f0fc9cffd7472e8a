//! Length units used throughout layout.
//!
//! Everything is ultimately expressed in [`Pt`] (PDF points, 1/72 of an inch).
//! [`In`] and [`Mm`] exist so that callers can write margins and page sizes in
//! whatever unit is convenient and convert with `.into()`.

use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, MulAssign, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, Neg};

/// A length in PDF points
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    MulAssign,
    Sum,
    Deref,
    DerefMut,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, From, Into, Display)]
#[display("{_0}in")]
pub struct In(pub f32);

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, From, Into, Display)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

impl Pt {
    pub const ZERO: Pt = Pt(0.0);

    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * 72.0 / 25.4)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// Dividing two lengths yields a plain ratio
impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}
