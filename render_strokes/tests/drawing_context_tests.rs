use flo_render_strokes::draw::*;
use flo_render_strokes::pixel::*;
use flo_render_strokes::raster::*;
use flo_render_strokes::render::*;
use flo_render_strokes::strokes::*;

fn horizontal_line(y: f64, width: f64, color: PointSample) -> StrokeExpression {
    StrokeExpression::new()
        .line(PointSample::at(0.0, y), PointSample::at(10.0, y))
        .fix(color.with_width(width))
}

fn vertical_line(x: f64, width: f64, color: PointSample) -> StrokeExpression {
    StrokeExpression::new()
        .line(PointSample::at(x, 0.0), PointSample::at(x, 10.0))
        .fix(color.with_width(width))
}

fn white_buffer(width: usize, height: usize) -> StrokeBuffer {
    let mut buffer = StrokeBuffer::new(width, height);
    buffer.pixels_mut().iter_mut().for_each(|pixel| *pixel = U8RgbaPixel::from_components([255, 255, 255, 255]));

    buffer
}

#[test]
fn default_context() {
    let drawing = DrawingContext::new();

    assert!(drawing.segmentation == 256);
    assert!(drawing.default_point == ResolvedPoint::default());
    assert!(drawing.strokes().is_empty());
}

#[test]
fn sample_empty_stroke_gives_defaults() {
    let default = ResolvedPoint { x: 3.0, y: 4.0, r: 0.5, g: 0.5, b: 0.5, a: 0.5, w: 2.0 };
    let points  = sample_stroke(&StrokeExpression::new(), &default, 8);

    assert!(points.len() == 9);
    assert!(points.iter().all(|point| *point == default));
}

#[test]
fn sample_evenly_spaced() {
    let line    = StrokeExpression::new().line(PointSample::at(0.0, 0.0), PointSample::at(8.0, 0.0));
    let points  = sample_stroke(&line, &ResolvedPoint::default(), 4);

    let xs      = points.iter().map(|point| point.x).collect::<Vec<_>>();
    assert!(xs == vec![0.0, 2.0, 4.0, 6.0, 8.0], "{:?}", xs);
}

#[test]
fn zero_segmentation_draws_nothing() {
    let mut drawing = DrawingContext::new().with_segmentation(0);
    drawing.add_stroke(horizontal_line(5.0, 3.0, PointSample::rgb(1.0, 0.0, 0.0)));

    let layer = drawing.render_layer(12, 12);

    assert!(layer.pixels().iter().all(|pixel| pixel.is_transparent()));
    assert!(sample_stroke(&drawing.strokes()[0], &drawing.default_point, 0).is_empty());
}

#[test]
fn stroke_uses_default_point() {
    let mut drawing = DrawingContext::new()
        .with_segmentation(16)
        .with_default_point(ResolvedPoint { r: 1.0, g: 0.0, b: 0.0, a: 1.0, w: 3.0, ..ResolvedPoint::default() });
    drawing.add_stroke(StrokeExpression::new().line(PointSample::at(0.0, 5.0), PointSample::at(10.0, 5.0)));

    let layer = drawing.render_layer(12, 12);

    assert!(layer.pixel(5, 5) == Some(U8RgbaPixel::from_components([255, 0, 0, 255])), "{:?}", layer.pixel(5, 5));
    assert!(layer.pixel(5, 6) == Some(U8RgbaPixel::from_components([255, 0, 0, 255])), "{:?}", layer.pixel(5, 6));
    assert!(layer.pixel(5, 8).map(|pixel| pixel.alpha()) == Some(0), "{:?}", layer.pixel(5, 8));
}

#[test]
fn stroke_has_round_start_cap() {
    let mut drawing = DrawingContext::new().with_segmentation(8);
    drawing.add_stroke(StrokeExpression::new()
        .line(PointSample::at(5.0, 5.0), PointSample::at(15.0, 5.0))
        .fix(PointSample::default().with_width(5.0)));

    let layer = drawing.render_layer(24, 12);

    // Inside the start and end caps
    assert!(layer.pixel(3, 5).map(|pixel| pixel.alpha()) == Some(255), "{:?}", layer.pixel(3, 5));
    assert!(layer.pixel(17, 5).map(|pixel| pixel.alpha()) == Some(255), "{:?}", layer.pixel(17, 5));

    // Outside the caps
    assert!(layer.pixel(1, 5).map(|pixel| pixel.alpha()) == Some(0), "{:?}", layer.pixel(1, 5));
    assert!(layer.pixel(19, 5).map(|pixel| pixel.alpha()) == Some(0), "{:?}", layer.pixel(19, 5));
}

#[test]
fn opaque_strokes_overlap_without_seams() {
    let mut drawing = DrawingContext::new().with_segmentation(32);
    drawing.add(vec![
        horizontal_line(5.0, 3.0, PointSample::rgb(1.0, 0.0, 0.0)),
        vertical_line(5.0, 3.0, PointSample::rgb(0.0, 0.0, 1.0)),
    ]);

    let layer = drawing.render_layer(11, 11);

    for (x, y) in [(5, 5), (4, 5), (6, 5), (5, 4), (5, 6), (1, 5), (5, 1)].iter() {
        assert!(layer.pixel(*x, *y).map(|pixel| pixel.alpha()) == Some(255), "({:?}, {:?}) {:?}", x, y, layer.pixel(*x, *y));
    }

    // The later stroke is on top
    assert!(layer.pixel(5, 5) == Some(U8RgbaPixel::from_components([0, 0, 255, 255])), "{:?}", layer.pixel(5, 5));
}

#[test]
fn transparent_strokes_in_one_context_blend_as_group() {
    let black = PointSample::rgba(0.0, 0.0, 0.0, 0.5);

    let mut drawing = DrawingContext::new().with_segmentation(32);
    drawing.add(vec![horizontal_line(5.0, 3.0, black), vertical_line(5.0, 3.0, black)]);

    let mut target = white_buffer(11, 11);
    drawing.draw(&mut target);

    let crossing    = target.pixel(5, 5).unwrap();
    let single      = target.pixel(1, 5).unwrap();

    assert!(crossing == single, "{:?} {:?}", crossing, single);
    assert!(single.get_components()[0] < 255 && single.get_components()[0] > 0, "{:?}", single);
}

#[test]
fn transparent_strokes_in_separate_draws_blend_normally() {
    let black = PointSample::rgba(0.0, 0.0, 0.0, 0.5);

    let mut horizontal  = DrawingContext::new().with_segmentation(32);
    let mut vertical    = DrawingContext::new().with_segmentation(32);
    horizontal.add_stroke(horizontal_line(5.0, 3.0, black));
    vertical.add_stroke(vertical_line(5.0, 3.0, black));

    let mut target = white_buffer(11, 11);
    horizontal.draw(&mut target);
    vertical.draw(&mut target);

    let crossing    = target.pixel(5, 5).unwrap().get_components();
    let single      = target.pixel(1, 5).unwrap().get_components();

    assert!(single == [127, 127, 127, 255], "{:?}", single);
    assert!(crossing == [63, 63, 63, 255], "{:?}", crossing);
}

#[test]
fn transparent_stroke_does_not_darken_at_joins() {
    // A curve made of many segments should have an even alpha along its length
    let mut drawing = DrawingContext::new().with_segmentation(64);
    drawing.add_stroke(StrokeExpression::new()
        .circle(16.0, 16.0, 10.0, 0.0, false)
        .fix(PointSample::rgba(0.0, 0.0, 0.0, 0.5).with_width(4.0)));

    let layer = drawing.render_layer(32, 32);

    // Points on the circle itself are fully covered, so all have the stroke's alpha
    for (x, y) in [(26, 16), (16, 26), (6, 16), (16, 6)].iter() {
        assert!(layer.pixel(*x, *y).map(|pixel| pixel.alpha()) == Some(128), "({:?}, {:?}) {:?}", x, y, layer.pixel(*x, *y));
    }
}

#[test]
fn clear_then_draw_renders_nothing() {
    let mut drawing = DrawingContext::new();
    drawing.add_stroke(horizontal_line(5.0, 3.0, PointSample::rgb(1.0, 0.0, 0.0)));
    drawing.clear();

    let mut target  = StrokeBuffer::new(12, 12);
    drawing.draw(&mut target);
    assert!(target.pixels().iter().all(|pixel| pixel.is_transparent()));

    let mut white   = white_buffer(12, 12);
    drawing.draw(&mut white);
    assert!(white == white_buffer(12, 12));
}

#[test]
fn draw_to_rgba_frame() {
    let mut drawing = DrawingContext::new().with_segmentation(16);
    drawing.add_stroke(horizontal_line(2.0, 1.0, PointSample::rgb(0.0, 1.0, 0.0)));

    let mut bytes   = vec![0u8; 12*4*4];
    let mut frame   = RgbaFrame::from_bytes(12, 4, &mut bytes).unwrap();
    drawing.draw(&mut frame);

    let pos = (2*12 + 5) * 4;
    assert!(bytes[pos..(pos+4)] == [0, 255, 0, 255], "{:?}", &bytes[pos..(pos+4)]);
    assert!(bytes[0..4] == [0, 0, 0, 0]);
}

#[test]
fn strokes_can_be_shared_between_contexts() {
    let stroke = horizontal_line(5.0, 3.0, PointSample::rgb(1.0, 0.0, 0.0));

    let mut first   = DrawingContext::new().with_segmentation(16);
    let mut second  = DrawingContext::new().with_segmentation(16);
    first.add_stroke(stroke.clone());
    second.add_stroke(stroke);

    assert!(first.render_layer(12, 12) == second.render_layer(12, 12));
}
