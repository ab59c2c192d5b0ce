use crate::camera::{Camera, RESOLUTION, SCREEN_RES_X, SCREEN_RES_Y};
use crate::geometry::{ScreenPoint, Vertex};
use crate::height_field::HeightField;
use crate::view::{Stretch, ViewParameters};

/// Screen positions for every storage vertex of a height field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenGrid {
    width: usize,
    height: usize,
    points: Vec<ScreenPoint>,
}

impl ScreenGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            points: vec![ScreenPoint::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, i: usize, j: usize) -> ScreenPoint {
        self.points[j * self.width + i]
    }

    fn set(&mut self, i: usize, j: usize, point: ScreenPoint) {
        self.points[j * self.width + i] = point;
    }
}

/// Per-frame state for turning grid vertices into pixels.
pub struct Projector<'a> {
    camera: &'a Camera,
    view: &'a ViewParameters,
    stretch: Stretch,
    half_width: f64,
    half_height: f64,
    cos: f64,
    sin: f64,
    center: (i32, i32),
}

impl<'a> Projector<'a> {
    pub fn new(
        camera: &'a Camera,
        view: &'a ViewParameters,
        stretch: Stretch,
        storage_size: (usize, usize),
        canvas_size: (u32, u32),
    ) -> Self {
        let angle = view.rotation_radians();
        Self {
            camera,
            view,
            stretch,
            half_width: storage_size.0 as f64 / 2.0,
            half_height: storage_size.1 as f64 / 2.0,
            cos: angle.cos(),
            sin: angle.sin(),
            center: (
                (canvas_size.0 as i32 - SCREEN_RES_X as i32) / 2,
                (canvas_size.1 as i32 - SCREEN_RES_Y as i32) / 2,
            ),
        }
    }

    /// World position of storage vertex `(i, j)` at height `z`, after the
    /// grid has been centered, stretched and rotated about the vertical axis.
    pub fn world_position(&self, i: usize, j: usize, z: f64) -> Vertex {
        let x = (i as f64 - self.half_width) * self.stretch.x;
        let y = (j as f64 - self.half_height) * self.stretch.y;
        Vertex::new(
            x * self.cos - y * self.sin,
            x * self.sin + y * self.cos,
            z,
        )
    }

    /// Projects one vertex. The eye depth used for the screen position is the
    /// constant `RESOLUTION`, which makes the image orthographic; the true
    /// eye depth only feeds the depth value.
    pub fn project_point(&self, i: usize, j: usize, z: f64) -> ScreenPoint {
        let world = self.world_position(i, j, z);
        let eye = self.camera.basis.to_eye(world - self.view.from);
        let c = &self.camera.constants;
        let ez = RESOLUTION;
        let sx = (c.cx1 * eye.x / ez + c.cx2).round() as i32;
        let sy = SCREEN_RES_Y as i32 - (c.cy1 * eye.y / ez + c.cy2).round() as i32;
        ScreenPoint {
            x: sx + self.center.0 + self.view.screen_offset.0,
            y: sy + self.center.1 + self.view.screen_offset.1,
            depth: c.depth(eye.z),
        }
    }
}

/// Fills `projected` with true-height positions and `ortho` with the same
/// vertices flattened to height zero.
pub fn world_to_screen(
    field: &HeightField,
    projector: &Projector<'_>,
    projected: &mut ScreenGrid,
    ortho: &mut ScreenGrid,
) {
    let (width, height) = (field.storage_width(), field.storage_height());
    if projected.width() != width || projected.height() != height {
        *projected = ScreenGrid::new(width, height);
    }
    if ortho.width() != width || ortho.height() != height {
        *ortho = ScreenGrid::new(width, height);
    }
    for j in 0..height {
        for i in 0..width {
            let z = f64::from(field.stored(i, j));
            projected.set(i, j, projector.project_point(i, j, z));
            ortho.set(i, j, projector.project_point(i, j, 0.0));
        }
    }
}
