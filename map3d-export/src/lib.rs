//! File and pixel-buffer output for the map renderer, drawn through
//! plotters backends.

mod frame;
mod plotters_canvas;

pub use frame::FrameBuffer;
pub use plotters_canvas::PlottersCanvas;

use map3d_core::{FrameRequest, RenderError, Renderer};
use plotters::backend::SVGBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("drawing backend failed: {0}")]
    Backend(String),
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

fn paint_and_present<DB: DrawingBackend>(
    area: DrawingArea<DB, Shift>,
    renderer: &mut Renderer,
    request: &FrameRequest,
) -> Result<(), ExportError> {
    {
        let mut canvas = PlottersCanvas::new(&area);
        renderer.paint(&mut canvas, request)?;
    }
    area.present().map_err(|e| ExportError::Backend(e.to_string()))?;
    Ok(())
}

/// Full paint at the renderer's canvas size, written as PNG.
pub fn export_png(
    renderer: &mut Renderer,
    request: &FrameRequest,
    path: &Path,
) -> Result<(), ExportError> {
    let root = BitMapBackend::new(path, renderer.canvas_size()).into_drawing_area();
    paint_and_present(root, renderer, request)?;
    log::info!("exported PNG to {}", path.display());
    Ok(())
}

/// Full paint at the renderer's canvas size, written as SVG.
pub fn export_svg(
    renderer: &mut Renderer,
    request: &FrameRequest,
    path: &Path,
) -> Result<(), ExportError> {
    let root = SVGBackend::new(path, renderer.canvas_size()).into_drawing_area();
    paint_and_present(root, renderer, request)?;
    log::info!("exported SVG to {}", path.display());
    Ok(())
}

/// Picks PNG or SVG from the file extension.
pub fn export(
    renderer: &mut Renderer,
    request: &FrameRequest,
    path: &Path,
) -> Result<(), ExportError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "png" => export_png(renderer, request, path),
        "svg" => export_svg(renderer, request, path),
        other => Err(ExportError::UnsupportedFormat(other.to_string())),
    }
}
