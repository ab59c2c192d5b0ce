use crate::plotters_canvas::PlottersCanvas;
use crate::ExportError;
use map3d_core::{Canvas, RenderError, Rgb};
use plotters::prelude::*;
use std::path::Path;

/// RGB pixel buffer that keeps its contents between draws, so incremental
/// row updates land on top of the last full paint.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = (y as usize * self.width as usize + x as usize) * 3;
        Some(Rgb(self.pixels[at], self.pixels[at + 1], self.pixels[at + 2]))
    }

    /// Runs `draw` against a canvas backed by this buffer.
    pub fn draw<R>(
        &mut self,
        draw: impl FnOnce(&mut dyn Canvas) -> Result<R, RenderError>,
    ) -> Result<R, ExportError> {
        let size = (self.width, self.height);
        let area = BitMapBackend::with_buffer(&mut self.pixels, size).into_drawing_area();
        let result = {
            let mut canvas = PlottersCanvas::new(&area);
            draw(&mut canvas)?
        };
        area.present().map_err(|e| ExportError::Backend(e.to_string()))?;
        Ok(result)
    }

    pub fn save_png(&self, path: &Path) -> Result<(), ExportError> {
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )?;
        log::debug!("saved {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }
}
