use super::lerp::*;
use super::point_sample::*;
use super::stroke_expression::*;

use smallvec::*;

impl StrokeExpression {
    ///
    /// Interpolates between a set of control points using a bezier curve
    ///
    /// Each field is interpolated separately, and a field is only generated if every control point defines it.
    /// Fields that are missing from any of the control points are passed through from this expression.
    ///
    /// For example, a bezier with control points that only set the width can be applied on top of a line to
    /// make a stroke that changes in thickness.
    ///
    pub fn bezier(&self, control_points: impl IntoIterator<Item=PointSample>) -> StrokeExpression {
        let parent          = self.clone();
        let control_points  = control_points.into_iter().collect::<SmallVec<[PointSample; 4]>>();

        // The fields where every control point has a value (no control points means no fields)
        let mut present     = [!control_points.is_empty(); NUM_FIELDS];
        for point in control_points.iter() {
            for (is_present, field) in present.iter_mut().zip(point.fields().iter()) {
                *is_present = *is_present && field.is_some();
            }
        }

        // Arrange the values by field so we can interpolate each one separately
        let field_values    = (0..NUM_FIELDS)
            .map(|field_idx| {
                if present[field_idx] {
                    control_points.iter()
                        .flat_map(|point| point.fields()[field_idx])
                        .collect::<SmallVec<[f64; 4]>>()
                } else {
                    smallvec![]
                }
            })
            .collect::<Vec<_>>();

        StrokeExpression::from_fn(move |t| {
            let mut fields = [None; NUM_FIELDS];
            for (field, values) in fields.iter_mut().zip(field_values.iter()) {
                *field = bezier(t, values);
            }

            parent.evaluate(t).merge(&PointSample::from_fields(fields))
        })
    }

    ///
    /// Creates a straight line between two points (as a bezier curve of degree 1)
    ///
    #[inline]
    pub fn line(&self, start: PointSample, end: PointSample) -> StrokeExpression {
        self.bezier(vec![start, end])
    }
}
