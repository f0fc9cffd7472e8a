//! Affine transforms for drawing rotated content such as watermarks.

use crate::units::*;

/// A PDF transformation matrix `[a b c d e f]`:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
/// Transforms compose left to right with [`then`](Transform::then), so
/// `Transform::rotate(r).then(Transform::translate(x, y))` rotates about the
/// origin and then moves the result to `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn translate(x: Pt, y: Pt) -> Self {
        Transform {
            e: *x,
            f: *y,
            ..Self::identity()
        }
    }

    /// Counter-clockwise rotation, angle in radians
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Transform {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Apply `self`, then `other`
    pub fn then(self, other: Transform) -> Self {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Map a point through the transform
    pub fn apply(&self, x: Pt, y: Pt) -> (Pt, Pt) {
        (
            Pt(self.a * *x + self.c * *y + self.e),
            Pt(self.b * *x + self.d * *y + self.f),
        )
    }

    pub fn to_array(&self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}
