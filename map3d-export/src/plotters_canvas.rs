use map3d_core::{Canvas, CanvasError, Rgb};
use plotters::coord::Shift;
use plotters::prelude::*;

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Paints renderer output onto any plotters drawing area, bitmap or SVG.
pub struct PlottersCanvas<'a, DB: DrawingBackend> {
    area: &'a DrawingArea<DB, Shift>,
}

impl<'a, DB: DrawingBackend> PlottersCanvas<'a, DB> {
    pub fn new(area: &'a DrawingArea<DB, Shift>) -> Self {
        Self { area }
    }
}

impl<DB: DrawingBackend> Canvas for PlottersCanvas<'_, DB> {
    fn size(&self) -> (u32, u32) {
        self.area.dim_in_pixel()
    }

    fn clear(&mut self, color: Rgb) -> Result<(), CanvasError> {
        self.area
            .fill(&rgb(color))
            .map_err(|e| CanvasError(e.to_string()))
    }

    fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgb) -> Result<(), CanvasError> {
        self.area
            .draw(&Polygon::new(points.to_vec(), rgb(color).filled()))
            .map_err(|e| CanvasError(e.to_string()))
    }

    fn stroke_polygon(&mut self, points: &[(i32, i32)], color: Rgb) -> Result<(), CanvasError> {
        let Some(&first) = points.first() else {
            return Ok(());
        };
        let mut path = points.to_vec();
        path.push(first);
        self.area
            .draw(&PathElement::new(path, rgb(color)))
            .map_err(|e| CanvasError(e.to_string()))
    }

    fn draw_line(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        color: Rgb,
    ) -> Result<(), CanvasError> {
        self.area
            .draw(&PathElement::new(vec![from, to], rgb(color)))
            .map_err(|e| CanvasError(e.to_string()))
    }

    fn draw_point(&mut self, at: (i32, i32), color: Rgb) -> Result<(), CanvasError> {
        self.area
            .draw(&Pixel::new(at, rgb(color)))
            .map_err(|e| CanvasError(e.to_string()))
    }
}
