use flo_render_strokes::draw::*;
use flo_render_strokes::render::*;
use flo_render_strokes::strokes::*;

use std::f64::consts::PI;
use std::fs::File;

///
/// Renders a spiral whose colour and width change along its length to spiral.png
///
pub fn main() {
    env_logger::init();

    // The spiral is built directly from a parametric function: the radius grows as the curve winds around
    let turns   = 6.0;
    let spiral  = StrokeExpression::new()
        .parametric(move |t| {
            let angle   = t * turns * 2.0 * PI;
            let radius  = 20.0 + t * 420.0;

            PointSample::at(angle.cos() * radius, angle.sin() * radius)
        })
        .parametric(|t| hsl(t * 2.0, 0.8, 0.5, Some(0.9)).with_width(1.0 + t * 24.0))
        .translate(480.0, 480.0);

    let mut drawing = DrawingContext::new().with_segmentation(2048);
    drawing.add_stroke(spiral);

    // Write to a PNG file
    let file        = File::create("spiral.png").unwrap();
    let mut target  = PngRenderTarget::from_stream(file, 960, 960);

    drawing.draw(&mut target);
    target.finish().unwrap();
}
