use crate::error::{DegenerateReason, RenderError};
use crate::geometry::Vertex;
use crate::view::ViewParameters;
use map_settings::{MAX_FIELD_OF_VIEW_DEGREES, MIN_FIELD_OF_VIEW_DEGREES};

/// Side of the square virtual screen, in pixels. Also the constant eye depth
/// used by the per-point projection.
pub const RESOLUTION: f64 = 500.0;
pub const SCREEN_RES_X: f64 = RESOLUTION;
pub const SCREEN_RES_Y: f64 = RESOLUTION;
pub const Z_NEAR: f64 = 1.0;
pub const Z_FAR: f64 = 10_000.0;
/// Highest allowed look-at elevation.
pub const MAX_TARGET_ELEVATION: f64 = 5.0;

/// Rows are the unit eye-space axes expressed in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub x: Vertex,
    pub y: Vertex,
    pub z: Vertex,
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self {
            x: Vertex::new(1.0, 0.0, 0.0),
            y: Vertex::new(0.0, 1.0, 0.0),
            z: Vertex::new(0.0, 0.0, 1.0),
        }
    }
}

impl CameraBasis {
    /// World-space offset to eye-space coordinates.
    pub fn to_eye(&self, offset: Vertex) -> Vertex {
        Vertex::new(offset.dot(self.x), offset.dot(self.y), offset.dot(self.z))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectionConstants {
    pub cx1: f64,
    pub cx2: f64,
    pub cy1: f64,
    pub cy2: f64,
    pub cz1: f64,
    pub cz2: f64,
}

impl ProjectionConstants {
    pub fn for_field_of_view(field_of_view_degrees: i32) -> Self {
        let half_angle = f64::from(clamp_field_of_view(field_of_view_degrees)).to_radians() / 2.0;
        let tan = half_angle.tan();
        Self {
            cx1: SCREEN_RES_X / tan,
            cx2: SCREEN_RES_X / 2.0,
            cy1: SCREEN_RES_Y / tan,
            cy2: SCREEN_RES_Y / 2.0,
            cz1: (Z_FAR + Z_NEAR) / (Z_FAR - Z_NEAR),
            cz2: -2.0 * Z_FAR * Z_NEAR / (Z_FAR - Z_NEAR),
        }
    }

    /// Normalized depth for a true eye distance.
    pub fn depth(&self, eye_z: f64) -> f64 {
        if eye_z.abs() < f64::EPSILON {
            return self.cz1;
        }
        self.cz1 + self.cz2 / eye_z
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub basis: CameraBasis,
    pub constants: ProjectionConstants,
}

impl Camera {
    /// Builds the eye basis and projection constants for `view`.
    pub fn calculate(view: &ViewParameters) -> Result<Camera, RenderError> {
        let at = clamp_target(view.at);
        let z = (at - view.from).normalized().ok_or(RenderError::DegenerateCameraBasis(
            DegenerateReason::ZeroLookVector,
        ))?;
        let x = z.cross(view.up).normalized().ok_or(RenderError::DegenerateCameraBasis(
            DegenerateReason::UpParallelToLook,
        ))?;
        let y = x
            .cross(z)
            .normalized()
            .ok_or(RenderError::DegenerateCameraBasis(
                DegenerateReason::UpParallelToLook,
            ))?;
        Ok(Camera {
            basis: CameraBasis { x, y, z },
            constants: ProjectionConstants::for_field_of_view(view.field_of_view_degrees),
        })
    }
}

pub(crate) fn clamp_target(mut at: Vertex) -> Vertex {
    at.z = at.z.min(MAX_TARGET_ELEVATION);
    at
}

pub(crate) fn clamp_field_of_view(degrees: i32) -> i32 {
    degrees.clamp(MIN_FIELD_OF_VIEW_DEGREES, MAX_FIELD_OF_VIEW_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unit(v: Vertex) {
        assert!((v.length() - 1.0).abs() < 1e-9, "not unit: {v:?}");
    }

    #[test]
    fn basis_is_orthonormal() {
        let camera = Camera::calculate(&ViewParameters::default()).unwrap();
        let b = camera.basis;
        assert_unit(b.x);
        assert_unit(b.y);
        assert_unit(b.z);
        assert!(b.x.dot(b.y).abs() < 1e-9);
        assert!(b.x.dot(b.z).abs() < 1e-9);
        assert!(b.y.dot(b.z).abs() < 1e-9);
    }

    #[test]
    fn eye_x_points_right_and_y_points_up() {
        let view = ViewParameters {
            from: Vertex::new(0.0, -100.0, 0.0),
            at: Vertex::new(0.0, 0.0, 0.0),
            up: Vertex::new(0.0, 0.0, 1.0),
            ..ViewParameters::default()
        };
        let b = Camera::calculate(&view).unwrap().basis;
        assert!((b.x.x - 1.0).abs() < 1e-12);
        assert!((b.y.z - 1.0).abs() < 1e-12);
        assert!((b.z.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn target_elevation_is_capped() {
        let at = clamp_target(Vertex::new(0.0, 0.0, 80.0));
        assert_eq!(at.z, MAX_TARGET_ELEVATION);
        assert_eq!(clamp_target(Vertex::new(0.0, 0.0, -3.0)).z, -3.0);
    }

    #[test]
    fn zero_look_vector_is_rejected() {
        let view = ViewParameters {
            from: Vertex::new(1.0, 2.0, 3.0),
            at: Vertex::new(1.0, 2.0, 3.0),
            ..ViewParameters::default()
        };
        assert!(matches!(
            Camera::calculate(&view),
            Err(RenderError::DegenerateCameraBasis(
                DegenerateReason::ZeroLookVector
            ))
        ));
    }

    #[test]
    fn up_parallel_to_look_is_rejected() {
        let view = ViewParameters {
            from: Vertex::new(0.0, 0.0, 300.0),
            at: Vertex::new(0.0, 0.0, 0.0),
            up: Vertex::new(0.0, 0.0, 1.0),
            ..ViewParameters::default()
        };
        assert!(matches!(
            Camera::calculate(&view),
            Err(RenderError::DegenerateCameraBasis(
                DegenerateReason::UpParallelToLook
            ))
        ));
        assert!(view.validate().is_err());
    }

    #[test]
    fn ninety_degree_field_of_view_maps_one_unit_to_one_pixel() {
        let c = ProjectionConstants::for_field_of_view(90);
        assert!((c.cx1 - SCREEN_RES_X).abs() < 1e-9);
        assert_eq!(c.cx2, SCREEN_RES_X / 2.0);
    }

    #[test]
    fn field_of_view_is_clamped() {
        assert_eq!(clamp_field_of_view(0), MIN_FIELD_OF_VIEW_DEGREES);
        assert_eq!(clamp_field_of_view(180), MAX_FIELD_OF_VIEW_DEGREES);
        assert!(ProjectionConstants::for_field_of_view(180).cx1.is_finite());
    }
}
