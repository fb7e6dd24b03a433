use flo_render_strokes::draw::*;
use flo_render_strokes::render::*;
use flo_render_strokes::strokes::*;

use std::fs::File;

///
/// Renders a wave made from a sequence of bezier curves, with a semi-transparent ring drawn over the top, to bezier_sequence.png
///
pub fn main() {
    env_logger::init();

    // Each section of the wave is the same curve, moved along
    let section     = StrokeExpression::new()
        .bezier(vec![
            PointSample::at(0.0, 0.0).with_width(4.0),
            PointSample::at(50.0, -120.0).with_width(4.0),
            PointSample::at(150.0, 120.0).with_width(16.0),
            PointSample::at(200.0, 0.0).with_width(16.0),
        ]);
    let sections    = (0..4).map(|idx| section.translate((idx as f64) * 200.0, 0.0));

    let wave        = StrokeExpression::sequence(sections)
        .parametric(|t| hsl(0.55 + t * 0.3, 0.9, 0.45, None))
        .translate(100.0, 300.0);

    // Ellipse drawn with a fixed translucent colour in a separate context, so it blends with the wave underneath
    let ring        = StrokeExpression::new()
        .ellipse(500.0, 300.0, 320.0, 160.0, 0.0, false, EllipseForm::Polar)
        .rotate_around(0.2, 500.0, 300.0)
        .fix(PointSample::rgba(1.0, 0.6, 0.0, 0.5).with_width(20.0));

    let mut waves   = DrawingContext::new();
    let mut rings   = DrawingContext::new().with_segmentation(512);
    waves.add_stroke(wave);
    rings.add_stroke(ring);

    // Draw both contexts on to a transparent image
    let mut target  = PngRenderTarget::from_stream(File::create("bezier_sequence.png").unwrap(), 1000, 600);

    waves.draw(&mut target);
    rings.draw(&mut target);

    target.finish().unwrap();
}
