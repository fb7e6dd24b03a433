mod error;
mod frame_size;
mod composite;
mod render_target_trait;
mod rgba_frame;
mod image_render;

pub use error::*;
pub use frame_size::*;
pub use composite::*;
pub use render_target_trait::*;
pub use rgba_frame::*;
pub use image_render::*;
