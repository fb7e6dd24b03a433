use super::point_sample::*;
use super::transform2d::*;
use super::stroke_expression::*;

impl StrokeExpression {
    ///
    /// Applies an affine transform to the position generated by this expression
    ///
    /// Only the x and y fields are changed, and samples that don't define both of them are left as they are
    ///
    pub fn apply_transform(&self, transform: Transform2D) -> StrokeExpression {
        self.transform(move |sample| {
            match (sample.x, sample.y) {
                (Some(x), Some(y)) => {
                    let (x, y) = transform.transform_point(x, y);
                    PointSample::at(x, y)
                }

                _ => PointSample::empty()
            }
        })
    }

    ///
    /// Transforms the position using a canvas-ordered matrix (`x' = a*x + c*y + e`, `y' = b*x + d*y + f`)
    ///
    #[allow(clippy::many_single_char_names)]
    pub fn matrix(&self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> StrokeExpression {
        self.apply_transform(Transform2D::from_matrix(a, b, c, d, e, f))
    }

    /// Moves the stroke by an offset
    pub fn translate(&self, dx: f64, dy: f64) -> StrokeExpression {
        self.apply_transform(Transform2D::translate(dx, dy))
    }

    /// Scales the stroke about the origin
    pub fn scale(&self, sx: f64, sy: f64) -> StrokeExpression {
        self.apply_transform(Transform2D::scale(sx, sy))
    }

    /// Scales the stroke about a centre point
    pub fn scale_around(&self, sx: f64, sy: f64, center_x: f64, center_y: f64) -> StrokeExpression {
        self.apply_transform(Transform2D::around(Transform2D::scale(sx, sy), center_x, center_y))
    }

    /// Rotates the stroke about the origin (angle in radians)
    pub fn rotate(&self, angle: f64) -> StrokeExpression {
        self.apply_transform(Transform2D::rotate(angle))
    }

    /// Rotates the stroke about a centre point (angle in radians)
    pub fn rotate_around(&self, angle: f64, center_x: f64, center_y: f64) -> StrokeExpression {
        self.apply_transform(Transform2D::around(Transform2D::rotate(angle), center_x, center_y))
    }
}
