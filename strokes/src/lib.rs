//!
//! # flo_strokes
//!
//! `flo_strokes` describes 'strokes': parametric curves where the position, colour, alpha and width
//! can all vary continuously along the curve. A stroke is a `StrokeExpression`, an immutable function
//! that maps a parameter `t` (conventionally running from 0 to 1) to a `PointSample` describing
//! whatever is known about the stroke at that point.
//!
//! Expressions are built up by combining primitives (lines, bezier curves, ellipses) with transforms
//! (affine maps, reparametrisation, sequencing). Every combinator returns a new expression and leaves
//! the expression it was called on untouched, so expressions can be freely shared between drawings.
//!
//! ```
//! use flo_strokes::*;
//!
//! let stroke = StrokeExpression::new()
//!     .line(PointSample::at(0.0, 0.0), PointSample::at(100.0, 0.0))
//!     .bezier(vec![PointSample::default().with_width(1.0), PointSample::default().with_width(8.0)])
//!     .parametric(|t| hsl(t, 1.0, 0.5, None));
//!
//! let midpoint = stroke.evaluate(0.5);
//! assert!(midpoint.x == Some(50.0));
//! ```
//!
//! `flo_render_strokes` can render these expressions to a pixel buffer.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod lerp;
mod color;
mod point_sample;
mod transform2d;
mod stroke_expression;
mod bezier;
mod ellipse;
mod affine;
mod sequence;

pub use self::lerp::*;
pub use self::color::*;
pub use self::point_sample::*;
pub use self::transform2d::*;
pub use self::stroke_expression::*;
pub use self::ellipse::*;

pub use flo_curves as curves;
