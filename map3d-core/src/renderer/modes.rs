use super::{BIRDS_EYE_ORIGIN, BIRDS_EYE_PITCH, BIRDS_EYE_THRESHOLD};
use crate::canvas::{Canvas, CanvasError};
use crate::renderer::Renderer;

impl Renderer {
    /// Projected grid as line segments along both axes, border included.
    pub(crate) fn draw_wireframe<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
    ) -> Result<(), CanvasError> {
        let grid = &self.projected;
        let (width, height) = (grid.width(), grid.height());
        let color = self.palette.outline;
        for j in 0..height {
            for i in 0..width.saturating_sub(1) {
                canvas.draw_line(grid.get(i, j).pixel(), grid.get(i + 1, j).pixel(), color)?;
            }
        }
        for i in 0..width {
            for j in 0..height.saturating_sub(1) {
                canvas.draw_line(grid.get(i, j).pixel(), grid.get(i, j + 1).pixel(), color)?;
            }
        }
        Ok(())
    }

    /// Top-down scatter: one column of points per logical row, one point per
    /// sample. Ignores the camera.
    pub(crate) fn draw_birds_eye<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
    ) -> Result<(), CanvasError> {
        let Some(field) = self.field.as_ref() else {
            return Ok(());
        };
        let (left, top) = BIRDS_EYE_ORIGIN;
        for y in 0..field.data_height() {
            let column = left + y as i32 * BIRDS_EYE_PITCH;
            for (x, &sample) in field.row(y).iter().enumerate() {
                let color = if sample > BIRDS_EYE_THRESHOLD {
                    self.palette.birds_eye_highlight
                } else {
                    self.palette.baseline
                };
                canvas.draw_point((column, top + x as i32), color)?;
            }
        }
        Ok(())
    }
}
