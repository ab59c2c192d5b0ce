pub mod core;
pub mod modes;
pub mod polygons;

pub use self::core::{FrameRequest, RenderModes, Renderer};

/// Left/top pixel of the bird's-eye scatter.
pub const BIRDS_EYE_ORIGIN: (i32, i32) = (10, 10);
/// Horizontal distance between bird's-eye row columns.
pub const BIRDS_EYE_PITCH: i32 = 2;
/// Samples above this are drawn in the highlight color.
pub const BIRDS_EYE_THRESHOLD: i32 = 20;
