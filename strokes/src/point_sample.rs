use flo_curves::geo::*;

/// The number of fields in a point sample
pub (crate) const NUM_FIELDS: usize = 7;

///
/// Describes what is known about a stroke at a particular point
///
/// Every field is optional: a stroke expression only needs to supply the values it computes, and anything it leaves
/// as `None` falls through to the expression underneath it (or to the default point when the stroke is rendered).
///
/// Colours and alpha are in the range 0..1, and the width is measured in pixels.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSample {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub r: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
    pub a: Option<f64>,
    pub w: Option<f64>,
}

///
/// A point with every field defined, used for the endpoints of the segments that are rasterized
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPoint {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
    pub w: f64,
}

impl PointSample {
    ///
    /// A point sample with no fields defined
    ///
    #[inline]
    pub fn empty() -> PointSample {
        PointSample::default()
    }

    ///
    /// A point sample that defines only a position
    ///
    #[inline]
    pub fn at(x: f64, y: f64) -> PointSample {
        PointSample { x: Some(x), y: Some(y), ..PointSample::default() }
    }

    ///
    /// A point sample that defines only a colour
    ///
    #[inline]
    pub fn rgb(r: f64, g: f64, b: f64) -> PointSample {
        PointSample { r: Some(r), g: Some(g), b: Some(b), ..PointSample::default() }
    }

    ///
    /// A point sample that defines a colour and an alpha value
    ///
    #[inline]
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> PointSample {
        PointSample { r: Some(r), g: Some(g), b: Some(b), a: Some(a), ..PointSample::default() }
    }

    /// Returns this sample with the position set
    #[inline]
    pub fn with_position(self, x: f64, y: f64) -> PointSample {
        PointSample { x: Some(x), y: Some(y), ..self }
    }

    /// Returns this sample with the colour set
    #[inline]
    pub fn with_color(self, r: f64, g: f64, b: f64) -> PointSample {
        PointSample { r: Some(r), g: Some(g), b: Some(b), ..self }
    }

    /// Returns this sample with the alpha value set
    #[inline]
    pub fn with_alpha(self, a: f64) -> PointSample {
        PointSample { a: Some(a), ..self }
    }

    /// Returns this sample with the width set
    #[inline]
    pub fn with_width(self, w: f64) -> PointSample {
        PointSample { w: Some(w), ..self }
    }

    ///
    /// True if this sample does not define any fields
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|field| field.is_none())
    }

    ///
    /// True if this sample defines both of the positional fields
    ///
    #[inline]
    pub fn has_position(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    ///
    /// Combines two samples, taking the fields from `over` wherever they are defined and from this sample otherwise
    ///
    #[inline]
    pub fn merge(&self, over: &PointSample) -> PointSample {
        PointSample {
            x: over.x.or(self.x),
            y: over.y.or(self.y),
            r: over.r.or(self.r),
            g: over.g.or(self.g),
            b: over.b.or(self.b),
            a: over.a.or(self.a),
            w: over.w.or(self.w),
        }
    }

    ///
    /// The fields of this sample, in the order x, y, r, g, b, a, w
    ///
    #[inline]
    pub (crate) fn fields(&self) -> [Option<f64>; NUM_FIELDS] {
        [self.x, self.y, self.r, self.g, self.b, self.a, self.w]
    }

    ///
    /// Creates a sample from a set of fields in the order returned by `fields()`
    ///
    #[inline]
    pub (crate) fn from_fields(fields: [Option<f64>; NUM_FIELDS]) -> PointSample {
        let [x, y, r, g, b, a, w] = fields;

        PointSample { x, y, r, g, b, a, w }
    }
}

impl Default for ResolvedPoint {
    ///
    /// The default point is an opaque black, 1 pixel wide, located at the origin
    ///
    fn default() -> Self {
        ResolvedPoint { x: 0.0, y: 0.0, r: 0.0, g: 0.0, b: 0.0, a: 1.0, w: 1.0 }
    }
}

impl ResolvedPoint {
    ///
    /// Creates a new point with the fields from a sample replacing the fields from this point wherever they are defined
    ///
    #[inline]
    pub fn merge(&self, sample: &PointSample) -> ResolvedPoint {
        ResolvedPoint {
            x: sample.x.unwrap_or(self.x),
            y: sample.y.unwrap_or(self.y),
            r: sample.r.unwrap_or(self.r),
            g: sample.g.unwrap_or(self.g),
            b: sample.b.unwrap_or(self.b),
            a: sample.a.unwrap_or(self.a),
            w: sample.w.unwrap_or(self.w),
        }
    }

    ///
    /// The position of this point
    ///
    #[inline]
    pub fn position(&self) -> Coord2 {
        Coord2(self.x, self.y)
    }
}

impl From<ResolvedPoint> for PointSample {
    #[inline]
    fn from(point: ResolvedPoint) -> PointSample {
        PointSample {
            x: Some(point.x),
            y: Some(point.y),
            r: Some(point.r),
            g: Some(point.g),
            b: Some(point.b),
            a: Some(point.a),
            w: Some(point.w),
        }
    }
}
