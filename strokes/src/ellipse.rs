use super::point_sample::*;
use super::stroke_expression::*;

use std::f64::consts::{PI};

///
/// How the parameter of an ellipse maps to a point on its circumference
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EllipseForm {
    /// `t` is the parametric angle: the point is `(rx*cos(2πt), ry*sin(2πt))`
    Parametric,

    /// `t` is the angle between the x-axis and the line from the centre to the point
    Polar,

    /// The polar correction with the ratio of the radii inverted
    Tangent,
}

impl Default for EllipseForm {
    fn default() -> Self {
        EllipseForm::Parametric
    }
}

impl EllipseForm {
    ///
    /// Converts an angle in this form into the parametric angle for an ellipse with the specified radii (angles are measured in turns)
    ///
    pub fn parametric_angle(&self, angle: f64, radius_x: f64, radius_y: f64) -> f64 {
        match self {
            EllipseForm::Parametric => angle,
            EllipseForm::Polar      => continuous_atan_angle(angle, radius_x / radius_y),
            EllipseForm::Tangent    => continuous_atan_angle(angle, radius_y / radius_x),
        }
    }
}

///
/// Computes `atan(tan(angle) * ratio)` (in turns), choosing the branch that keeps the result continuous as the angle increases
///
/// The angle is normalised into the range -0.25..0.75 first, as the tangent is undefined at ±90 degrees
///
fn continuous_atan_angle(angle: f64, ratio: f64) -> f64 {
    let angle       = angle - (angle + 0.25).floor();
    let corrected   = ((angle * 2.0 * PI).tan() * ratio).atan() / (2.0 * PI);

    if angle.abs() > 0.25 {
        corrected + 0.5 * angle.signum()
    } else {
        corrected
    }
}

impl StrokeExpression {
    ///
    /// Sets the position to follow an ellipse
    ///
    /// `start` is the angle (in turns, in the convention chosen by `form`) where the ellipse begins, and the full
    /// ellipse is traversed as `t` goes from 0 to 1. Increasing angles move from the x-axis towards the y-axis
    /// (clockwise when y points down the screen) unless `counter_clockwise` is set.
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn ellipse(&self, center_x: f64, center_y: f64, radius_x: f64, radius_y: f64, start: f64, counter_clockwise: bool, form: EllipseForm) -> StrokeExpression {
        let direction = if counter_clockwise { -1.0 } else { 1.0 };

        self.parametric(move |t| {
            let angle           = form.parametric_angle(start + direction * t, radius_x, radius_y) * 2.0 * PI;
            let (sin, cos)      = angle.sin_cos();

            PointSample::at(center_x + radius_x * cos, center_y + radius_y * sin)
        })
    }

    ///
    /// Sets the position to follow a circle
    ///
    pub fn circle(&self, center_x: f64, center_y: f64, radius: f64, start: f64, counter_clockwise: bool) -> StrokeExpression {
        self.ellipse(center_x, center_y, radius, radius, start, counter_clockwise, EllipseForm::Parametric)
    }
}
