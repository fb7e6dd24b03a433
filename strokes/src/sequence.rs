use super::stroke_expression::*;

impl StrokeExpression {
    ///
    /// Joins a set of expressions end to end
    ///
    /// The range 0..1 is divided into equal intervals, one per expression, and each expression is evaluated from
    /// 0 to 1 over its interval. Values of `t` outside of 0..1 are passed to the first or last expression.
    ///
    pub fn sequence(expressions: impl IntoIterator<Item=StrokeExpression>) -> StrokeExpression {
        let expressions = expressions.into_iter().collect::<Vec<_>>();

        if expressions.is_empty() {
            return StrokeExpression::new();
        }

        StrokeExpression::from_fn(move |t| {
            let count   = expressions.len();
            let scaled  = t * (count as f64);
            let index   = (scaled.floor().max(0.0) as usize).min(count-1);

            expressions[index].evaluate(scaled - (index as f64))
        })
    }
}

