mod coverage;
mod scan_axis;
mod scan_segment;
mod stroke_buffer;
mod draw_segment;

pub use coverage::*;
pub use scan_axis::*;
pub use scan_segment::*;
pub use stroke_buffer::*;
pub use draw_segment::*;
