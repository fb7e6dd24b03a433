use super::lerp::*;
use super::point_sample::*;

use std::fmt;
use std::sync::*;

///
/// A stroke expression describes a stroke as a function from a parameter `t` to a `PointSample`
///
/// Expressions are immutable: every combinator returns a new expression that evaluates the expression it was
/// created from, so a single expression can be shared by as many strokes and drawings as needed. Cloning an
/// expression is cheap.
///
/// The parameter is conventionally in the range 0..1 (this is the range used when rendering a stroke), but
/// expressions can be evaluated at any value of `t`.
///
#[derive(Clone)]
pub struct StrokeExpression {
    evaluator: Arc<dyn Send + Sync + Fn(f64) -> PointSample>,
}

impl StrokeExpression {
    ///
    /// Creates the empty expression, which leaves every field undefined for every value of `t`
    ///
    pub fn new() -> StrokeExpression {
        StrokeExpression::from_fn(|_t| PointSample::empty())
    }

    ///
    /// Creates an expression that calls a function to evaluate each point
    ///
    pub fn from_fn(evaluate: impl 'static + Send + Sync + Fn(f64) -> PointSample) -> StrokeExpression {
        StrokeExpression {
            evaluator: Arc::new(evaluate)
        }
    }

    ///
    /// Evaluates this expression at a point
    ///
    #[inline]
    pub fn evaluate(&self, t: f64) -> PointSample {
        (self.evaluator)(t)
    }

    ///
    /// Computes new fields from `t`, replacing any fields with the same names generated by this expression
    ///
    pub fn parametric(&self, fields: impl 'static + Send + Sync + Fn(f64) -> PointSample) -> StrokeExpression {
        let parent = self.clone();

        StrokeExpression::from_fn(move |t| parent.evaluate(t).merge(&fields(t)))
    }

    ///
    /// Computes new fields from the sample generated by this expression
    ///
    /// The fields returned by the transform function replace the fields of the original sample, and anything it
    /// leaves undefined is passed through unchanged.
    ///
    pub fn transform(&self, transform: impl 'static + Send + Sync + Fn(PointSample) -> PointSample) -> StrokeExpression {
        let parent = self.clone();

        StrokeExpression::from_fn(move |t| {
            let sample = parent.evaluate(t);
            sample.merge(&transform(sample))
        })
    }

    ///
    /// Reparametrises this expression, so it is evaluated at `slide(t)` instead of at `t`
    ///
    pub fn slide(&self, slide: impl 'static + Send + Sync + Fn(f64) -> f64) -> StrokeExpression {
        let parent = self.clone();

        StrokeExpression::from_fn(move |t| parent.evaluate(slide(t)))
    }

    ///
    /// Creates an expression covering the section of this one between `t0` and `t1`
    ///
    /// The new expression evaluates to this one at `t0` when `t` is 0 and at `t1` when `t` is 1. `t0` can be
    /// greater than `t1` to reverse the direction of the stroke.
    ///
    pub fn cut(&self, t0: f64, t1: f64) -> StrokeExpression {
        self.slide(move |t| lerp(t, t0, t1))
    }

    ///
    /// Sets the fields defined in `point` to constant values, replacing anything computed by this expression
    ///
    pub fn fix(&self, point: PointSample) -> StrokeExpression {
        let parent = self.clone();

        StrokeExpression::from_fn(move |t| parent.evaluate(t).merge(&point))
    }
}

impl Default for StrokeExpression {
    fn default() -> Self {
        StrokeExpression::new()
    }
}

impl fmt::Debug for StrokeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrokeExpression").finish_non_exhaustive()
    }
}
