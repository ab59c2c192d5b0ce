use crate::canvas::CanvasError;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("camera basis is degenerate: {0}")]
    DegenerateCameraBasis(DegenerateReason),
    #[error("no full paint has been performed yet")]
    NotPainted,
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// `at` coincides with `from`.
    ZeroLookVector,
    /// `up` is parallel to the line of sight.
    UpParallelToLook,
}

impl std::fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegenerateReason::ZeroLookVector => write!(f, "look-at target equals eye position"),
            DegenerateReason::UpParallelToLook => {
                write!(f, "up vector is parallel to the line of sight")
            }
        }
    }
}
