//! Height-field map rendering: a camera basis and constant-depth projection
//! from grid vertices to pixels, painter's-order hidden-surface removal over
//! a border-padded height field, and an incremental single-row redraw for
//! live data.

pub mod camera;
pub mod canvas;
pub mod classify;
pub mod draw_order;
pub mod error;
pub mod geometry;
pub mod height_field;
pub mod projection;
pub mod renderer;
pub mod view;

pub use camera::{Camera, CameraBasis, ProjectionConstants};
pub use canvas::{Canvas, CanvasError, DrawOp, RecordingCanvas};
pub use classify::{assign_color, ColorClass, Palette, Rgb, Thresholds};
pub use draw_order::{AxisOrder, Direction, DrawOrder, Quadrant};
pub use error::{DegenerateReason, RenderError};
pub use geometry::{ScreenPoint, Vertex};
pub use height_field::{to_storage_index, HeightField};
pub use projection::{world_to_screen, Projector, ScreenGrid};
pub use renderer::{FrameRequest, RenderModes, Renderer};
pub use view::{Stretch, ViewParameters};
