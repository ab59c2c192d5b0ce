use crate::camera;
use crate::error::{DegenerateReason, RenderError};
use crate::geometry::Vertex;
use map_settings::{StretchSettings, ViewSettings};

/// Camera placement and image pan for one paint.
///
/// The grid is centered on the world origin and rotated about the vertical
/// axis by `rotation_degrees`; the eye stays put. Draw order assumes the eye
/// sits on the negative-Y side of the grid looking towards +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParameters {
    pub from: Vertex,
    pub at: Vertex,
    pub up: Vertex,
    pub rotation_degrees: i32,
    pub field_of_view_degrees: i32,
    pub screen_offset: (i32, i32),
}

impl Default for ViewParameters {
    fn default() -> Self {
        ViewParameters::from(&ViewSettings::default())
    }
}

impl From<&ViewSettings> for ViewParameters {
    fn from(view: &ViewSettings) -> Self {
        Self {
            from: Vertex::from(view.from),
            at: Vertex::from(view.at),
            up: Vertex::from(view.up),
            rotation_degrees: view.rotation_degrees,
            field_of_view_degrees: view.field_of_view_degrees,
            screen_offset: (view.screen_offset[0], view.screen_offset[1]),
        }
    }
}

impl ViewParameters {
    /// Checks the invariants `calculate` relies on, after the same clamping
    /// it applies.
    pub fn validate(&self) -> Result<(), RenderError> {
        let at = camera::clamp_target(self.at);
        let look = (at - self.from)
            .normalized()
            .ok_or(RenderError::DegenerateCameraBasis(DegenerateReason::ZeroLookVector))?;
        if look.cross(self.up).normalized().is_none() {
            return Err(RenderError::DegenerateCameraBasis(
                DegenerateReason::UpParallelToLook,
            ));
        }
        Ok(())
    }

    pub fn rotation_radians(&self) -> f64 {
        f64::from(self.rotation_degrees).to_radians()
    }
}

/// World distance between adjacent grid points along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stretch {
    pub x: f64,
    pub y: f64,
}

impl Default for Stretch {
    fn default() -> Self {
        Stretch::from(StretchSettings::default())
    }
}

impl From<StretchSettings> for Stretch {
    fn from(stretch: StretchSettings) -> Self {
        Self {
            x: stretch.x,
            y: stretch.y,
        }
    }
}
