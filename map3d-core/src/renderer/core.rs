use crate::camera::Camera;
use crate::canvas::Canvas;
use crate::classify::{Palette, Thresholds};
use crate::draw_order::{DrawOrder, Quadrant};
use crate::error::RenderError;
use crate::height_field::HeightField;
use crate::projection::{world_to_screen, Projector, ScreenGrid};
use crate::view::{Stretch, ViewParameters};
use map_settings::{MapSettings, ModeSettings};
use std::ops::Range;

/// Independent render layers. Every enabled layer is drawn, in the order
/// hidden surface, wireframe, bird's-eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderModes {
    pub hidden_surface: bool,
    pub wireframe: bool,
    pub birds_eye: bool,
}

impl Default for RenderModes {
    fn default() -> Self {
        RenderModes::from(ModeSettings::default())
    }
}

impl From<ModeSettings> for RenderModes {
    fn from(m: ModeSettings) -> Self {
        Self {
            hidden_surface: m.hidden_surface,
            wireframe: m.wireframe,
            birds_eye: m.birds_eye,
        }
    }
}

/// Everything a full paint needs besides the height data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameRequest {
    pub view: ViewParameters,
    pub stretch: Stretch,
    pub modes: RenderModes,
    pub thresholds: Thresholds,
}

impl From<&MapSettings> for FrameRequest {
    fn from(settings: &MapSettings) -> Self {
        Self {
            view: ViewParameters::from(&settings.view),
            stretch: Stretch::from(settings.stretch),
            modes: RenderModes::from(settings.modes),
            thresholds: Thresholds::from(settings.thresholds),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FrameState {
    request: FrameRequest,
    draw_order: Option<DrawOrder>,
}

/// Owns the height field and everything derived from it for drawing.
///
/// Single-threaded: rows produced elsewhere must be handed to the owning
/// thread before `set_row` / `quick_draw_single_row`.
pub struct Renderer {
    pub(crate) field: Option<HeightField>,
    pub(crate) projected: ScreenGrid,
    pub(crate) ortho: ScreenGrid,
    pub(crate) camera: Camera,
    pub(crate) palette: Palette,
    canvas_size: (u32, u32),
    last_frame: Option<FrameState>,
}

impl Renderer {
    /// A renderer without height storage. Painting is a no-op until
    /// `allocate_grid` is called.
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            field: None,
            projected: ScreenGrid::default(),
            ortho: ScreenGrid::default(),
            camera: Camera::default(),
            palette: Palette::default(),
            canvas_size: (canvas_width, canvas_height),
            last_frame: None,
        }
    }

    pub fn with_grid(
        data_width: usize,
        data_height: usize,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Self {
        let mut renderer = Renderer::new(canvas_width, canvas_height);
        renderer.allocate_grid(data_width, data_height);
        renderer
    }

    pub fn from_settings(settings: &MapSettings) -> Self {
        let mut renderer = Renderer::with_grid(
            settings.data_width,
            settings.data_height,
            settings.canvas_width,
            settings.canvas_height,
        );
        renderer.palette = Palette::from(settings.palette);
        renderer
    }

    /// (Re)allocates the height field and both screen grids. Samples and the
    /// cached draw order are discarded.
    pub fn allocate_grid(&mut self, data_width: usize, data_height: usize) {
        let field = HeightField::new(data_width, data_height);
        self.projected = ScreenGrid::new(field.storage_width(), field.storage_height());
        self.ortho = ScreenGrid::new(field.storage_width(), field.storage_height());
        self.field = Some(field);
        self.last_frame = None;
        log::debug!("allocated {data_width}x{data_height} height field");
    }

    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.canvas_size = (width, height);
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn height_field(&self) -> Option<&HeightField> {
        self.field.as_ref()
    }

    pub fn set_point(&mut self, x: usize, y: usize, value: i32) {
        self.field_mut().set_point(x, y, value);
    }

    pub fn set_row(&mut self, y: usize, samples: &[i32]) {
        self.field_mut().set_row(y, samples);
    }

    pub fn scroll_in_row(&mut self, samples: &[i32]) {
        self.field_mut().scroll_in_row(samples);
    }

    pub fn clear_samples(&mut self) {
        if let Some(field) = self.field.as_mut() {
            field.clear();
        }
    }

    pub fn projected(&self) -> &ScreenGrid {
        &self.projected
    }

    pub fn ortho_projected(&self) -> &ScreenGrid {
        &self.ortho
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Draw order cached by the last full paint, if any.
    pub fn draw_order(&self) -> Option<DrawOrder> {
        self.last_frame.and_then(|frame| frame.draw_order)
    }

    /// Recomputes the camera and both screen grids.
    pub fn project(&mut self, view: &ViewParameters, stretch: Stretch) -> Result<(), RenderError> {
        let Some(field) = self.field.as_ref() else {
            return Ok(());
        };
        let camera = Camera::calculate(view).map_err(|err| {
            log::warn!("projection skipped: {err}");
            err
        })?;
        self.camera = camera;
        let projector = Projector::new(
            &self.camera,
            view,
            stretch,
            (field.storage_width(), field.storage_height()),
            self.canvas_size,
        );
        world_to_screen(field, &projector, &mut self.projected, &mut self.ortho);
        Ok(())
    }

    /// Clears `canvas` and draws every enabled layer.
    pub fn paint<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        request: &FrameRequest,
    ) -> Result<(), RenderError> {
        let Some((width, height)) = self
            .field
            .as_ref()
            .map(|field| (field.storage_width(), field.storage_height()))
        else {
            log::debug!("paint skipped: no height field allocated");
            return Ok(());
        };
        self.project(&request.view, request.stretch)?;
        canvas.clear(self.palette.background)?;

        let draw_order = Quadrant::from_rotation(request.view.rotation_degrees)
            .map(|quadrant| quadrant.draw_order(width, height));
        if request.modes.hidden_surface {
            self.draw_hidden_surface(canvas, draw_order.as_ref(), &request.thresholds)?;
        }
        if request.modes.wireframe {
            self.draw_wireframe(canvas)?;
        }
        if request.modes.birds_eye {
            self.draw_birds_eye(canvas)?;
        }
        log::debug!(
            "painted {width}x{height} grid, rotation {} ({:?})",
            request.view.rotation_degrees,
            draw_order.map(|order| order.quadrant)
        );
        self.last_frame = Some(FrameState {
            request: *request,
            draw_order,
        });
        Ok(())
    }

    /// Incremental update after new samples landed in logical row `row`.
    pub fn quick_draw_single_row<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        row: usize,
        clear_above: bool,
    ) -> Result<(), RenderError> {
        self.quick_draw_rows(canvas, row..row + 1, clear_above)
    }

    /// Redraws the quads touching logical `rows` directly over what is on
    /// `canvas`, reusing the view and draw order of the last full paint.
    /// The whole grid is reprojected; only the affected quads are drawn.
    ///
    /// With `clear_above`, each affected quad's previous footprint is blanked
    /// first, in the quadrants where that is safe.
    pub fn quick_draw_rows<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        rows: Range<usize>,
        clear_above: bool,
    ) -> Result<(), RenderError> {
        let Some(data_height) = self.field.as_ref().map(HeightField::data_height) else {
            return Ok(());
        };
        assert!(
            rows.end <= data_height,
            "rows {rows:?} out of range (data height {data_height})"
        );
        let frame = self.last_frame.ok_or(RenderError::NotPainted)?;
        let Some(order) = frame.draw_order else {
            log::trace!("quick draw skipped: rotation out of range");
            return Ok(());
        };

        let previous = (clear_above && order.quadrant.supports_row_clear())
            .then(|| self.projected.clone());
        self.project(&frame.request.view, frame.request.stretch)?;

        let lines = rows.start + 1..rows.end + 1;
        if let Some(previous) = previous.as_ref() {
            self.clear_quads(canvas, &order, lines.clone(), previous)?;
        }
        let drawn =
            self.draw_polygons(canvas, &order, Some(lines), &frame.request.thresholds)?;
        log::trace!("quick draw of rows {rows:?}: {drawn} quads");
        Ok(())
    }

    fn field_mut(&mut self) -> &mut HeightField {
        match self.field.as_mut() {
            Some(field) => field,
            None => panic!("height field not allocated"),
        }
    }
}
