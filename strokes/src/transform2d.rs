use std::ops::{Mul};

///
/// A 2D affine transformation, stored as the top two rows of a 3x3 matrix
///
/// `from_matrix(a, b, c, d, e, f)` follows the HTML canvas ordering, so a point is transformed as
/// `x' = a*x + c*y + e` and `y' = b*x + d*y + f`.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transform2D(pub [[f64; 3]; 2]);

impl Transform2D {
    ///
    /// The transform that leaves every point where it is
    ///
    #[inline]
    pub fn identity() -> Transform2D {
        Transform2D([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
    }

    ///
    /// Creates a transform from the six canvas-ordered matrix values
    ///
    #[inline]
    pub fn from_matrix(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Transform2D {
        Transform2D([[a, c, e], [b, d, f]])
    }

    ///
    /// A transform that moves points by an offset
    ///
    #[inline]
    pub fn translate(dx: f64, dy: f64) -> Transform2D {
        Transform2D([[1.0, 0.0, dx], [0.0, 1.0, dy]])
    }

    ///
    /// A transform that scales points about the origin
    ///
    #[inline]
    pub fn scale(sx: f64, sy: f64) -> Transform2D {
        Transform2D([[sx, 0.0, 0.0], [0.0, sy, 0.0]])
    }

    ///
    /// A transform that rotates points about the origin (angle in radians)
    ///
    #[inline]
    pub fn rotate(angle: f64) -> Transform2D {
        let (sin, cos) = angle.sin_cos();

        Transform2D([[cos, -sin, 0.0], [sin, cos, 0.0]])
    }

    ///
    /// Applies `transform` about a centre point instead of the origin
    ///
    #[inline]
    pub fn around(transform: Transform2D, center_x: f64, center_y: f64) -> Transform2D {
        Transform2D::translate(center_x, center_y) * transform * Transform2D::translate(-center_x, -center_y)
    }

    ///
    /// Transforms a point
    ///
    #[inline]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let [[a, c, e], [b, d, f]] = self.0;

        (a*x + c*y + e, b*x + d*y + f)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Transform2D::identity()
    }
}

///
/// Transforms are combined as matrices: `(a * b).transform_point(p)` is the same as `a.transform_point(b.transform_point(p))`
///
impl Mul<Transform2D> for Transform2D {
    type Output = Transform2D;

    fn mul(self, other: Transform2D) -> Transform2D {
        let [[a1, c1, e1], [b1, d1, f1]] = self.0;
        let [[a2, c2, e2], [b2, d2, f2]] = other.0;

        Transform2D([
            [a1*a2 + c1*b2, a1*c2 + c1*d2, a1*e2 + c1*f2 + e1],
            [b1*a2 + d1*b2, b1*c2 + d1*d2, b1*e2 + d1*f2 + f1],
        ])
    }
}
