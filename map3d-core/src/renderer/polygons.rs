use crate::canvas::{Canvas, CanvasError};
use crate::classify::{assign_color, Thresholds};
use crate::draw_order::DrawOrder;
use crate::projection::ScreenGrid;
use crate::renderer::Renderer;
use std::ops::Range;

/// Storage indices of one quad's corners, as a closed loop.
fn quad_corners(order: &DrawOrder, ax: usize, ay: usize) -> [(usize, usize); 4] {
    let nx = order.x.neighbor(ax);
    let ny = order.y.neighbor(ay);
    [(ax, ay), (nx, ay), (nx, ny), (ax, ny)]
}

fn quad_pixels(grid: &ScreenGrid, corners: [(usize, usize); 4]) -> [(i32, i32); 4] {
    corners.map(|(i, j)| grid.get(i, j).pixel())
}

impl Renderer {
    /// Reference plane, border silhouette, then the shaded mesh far to near.
    /// Does nothing at all when the rotation has no draw order.
    pub(crate) fn draw_hidden_surface<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        order: Option<&DrawOrder>,
        thresholds: &Thresholds,
    ) -> Result<(), CanvasError> {
        let Some(order) = order else {
            log::debug!("hidden surface skipped: rotation out of range");
            return Ok(());
        };
        self.draw_reference_grid(canvas, order)?;
        self.draw_polygons(canvas, order, None, thresholds)?;
        Ok(())
    }

    /// Flat grid at height zero, plus the two far border edges from the
    /// true projection.
    pub(crate) fn draw_reference_grid<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        order: &DrawOrder,
    ) -> Result<(), CanvasError> {
        let (width, height) = (self.ortho.width(), self.ortho.height());
        if width == 0 || height == 0 {
            return Ok(());
        }
        let color = self.palette.grid;
        for j in 0..height {
            for i in 0..width - 1 {
                let a = self.ortho.get(i, j).pixel();
                let b = self.ortho.get(i + 1, j).pixel();
                canvas.draw_line(a, b, color)?;
            }
        }
        for i in 0..width {
            for j in 0..height - 1 {
                let a = self.ortho.get(i, j).pixel();
                let b = self.ortho.get(i, j + 1).pixel();
                canvas.draw_line(a, b, color)?;
            }
        }

        let outline = self.palette.outline;
        let far_row = order.y.start;
        for i in 0..width - 1 {
            let a = self.projected.get(i, far_row).pixel();
            let b = self.projected.get(i + 1, far_row).pixel();
            canvas.draw_line(a, b, outline)?;
        }
        let far_column = order.x.start;
        for j in 0..height - 1 {
            let a = self.projected.get(far_column, j).pixel();
            let b = self.projected.get(far_column, j + 1).pixel();
            canvas.draw_line(a, b, outline)?;
        }
        Ok(())
    }

    /// Fills and outlines every quad in `order`. `lines` restricts drawing to
    /// quads touching those storage rows. Returns the number of quads drawn.
    pub(crate) fn draw_polygons<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        order: &DrawOrder,
        lines: Option<Range<usize>>,
        thresholds: &Thresholds,
    ) -> Result<usize, CanvasError> {
        let Some(field) = self.field.as_ref() else {
            return Ok(0);
        };
        let lines = lines.unwrap_or(0..field.storage_height());
        let mut drawn = 0;
        for ay in order.y.anchors_touching(lines) {
            for ax in order.x.anchors() {
                let corners = quad_corners(order, ax, ay);
                let heights = corners.map(|(i, j)| field.stored(i, j));
                let color = self.palette.color_for(assign_color(heights, thresholds));
                let points = quad_pixels(&self.projected, corners);
                canvas.fill_polygon(&points, color)?;
                canvas.stroke_polygon(&points, self.palette.outline)?;
                drawn += 1;
            }
        }
        Ok(drawn)
    }

    /// Blanks the quads touching `lines` as they were placed in `previous`.
    pub(crate) fn clear_quads<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        order: &DrawOrder,
        lines: Range<usize>,
        previous: &ScreenGrid,
    ) -> Result<(), CanvasError> {
        if previous.width() != self.projected.width()
            || previous.height() != self.projected.height()
        {
            return Ok(());
        }
        let background = self.palette.background;
        for ay in order.y.anchors_touching(lines) {
            for ax in order.x.anchors() {
                let points = quad_pixels(previous, quad_corners(order, ax, ay));
                canvas.fill_polygon(&points, background)?;
                canvas.stroke_polygon(&points, background)?;
            }
        }
        Ok(())
    }
}
