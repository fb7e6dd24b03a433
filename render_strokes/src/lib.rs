//!
//! # flo_render_strokes
//!
//! A software renderer for the strokes described by `flo_strokes`. Strokes are sampled at evenly spaced points and
//! each pair of points is drawn as an antialiased segment whose width and colour are interpolated between the two
//! ends. Segments are blended so that the joins between them do not produce visible seams, even when the stroke is
//! semi-transparent.
//!
//! ```
//! use flo_render_strokes::draw::*;
//! use flo_render_strokes::render::*;
//! use flo_render_strokes::strokes::*;
//!
//! let mut drawing = DrawingContext::new();
//! drawing.add_stroke(StrokeExpression::new()
//!     .circle(32.0, 32.0, 24.0, 0.0, false)
//!     .parametric(|t| hsl(t, 1.0, 0.5, None).with_width(2.0 + t * 6.0)));
//!
//! let mut pixels  = vec![0u8; 64*64*4];
//! let mut frame   = RgbaFrame::from_bytes(64, 64, &mut pixels).unwrap();
//! drawing.draw(&mut frame);
//! ```
//!

/// Pixel formats used while rendering and compositing
pub mod pixel;

/// Rasterization of individual stroke segments into a stroke buffer
pub mod raster;

/// Surfaces that drawings can be rendered to
pub mod render;

/// Drawing contexts, which turn lists of strokes into rendered layers
pub mod draw;

pub use flo_strokes as strokes;
