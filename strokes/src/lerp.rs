use smallvec::*;

///
/// Linear interpolation between two values
///
/// `t` is not clamped: values outside the range 0..1 extrapolate along the line through `a` and `b`
///
#[inline]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    (1.0-t)*a + t*b
}

///
/// Evaluates the bezier curve with the specified control values at `t` (using De Casteljau's algorithm)
///
/// A curve with one control value is constant, and a curve with no control values evaluates to `None`.
///
pub fn bezier(t: f64, values: &[f64]) -> Option<f64> {
    if values.is_empty() { return None; }

    // Each pass replaces value n with the interpolation between values n and n+1, so after len-1 passes the first value is the result
    let mut working: SmallVec<[f64; 4]> = values.iter().copied().collect();

    for len in (1..working.len()).rev() {
        for idx in 0..len {
            working[idx] = lerp(t, working[idx], working[idx+1]);
        }
    }

    Some(working[0])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lerp_extrapolates() {
        assert!(lerp(0.5, 2.0, 4.0) == 3.0);
        assert!(lerp(2.0, 0.0, 1.0) == 2.0);
        assert!(lerp(-1.0, 0.0, 1.0) == -1.0);
    }

    #[test]
    fn constant_bezier() {
        assert!(bezier(0.3, &[7.0]) == Some(7.0));
        assert!(bezier(0.3, &[]) == None);
    }

    #[test]
    fn quadratic_bezier() {
        // Matches the recursive definition: lerp(t, bezier(first two), bezier(last two))
        let t           = 0.25;
        let expected    = lerp(t, lerp(t, 0.0, 10.0), lerp(t, 10.0, 0.0));

        assert!(bezier(t, &[0.0, 10.0, 0.0]) == Some(expected), "{:?} != {:?}", bezier(t, &[0.0, 10.0, 0.0]), expected);
    }
}
