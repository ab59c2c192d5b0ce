use crate::classify::Rgb;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("canvas draw failed: {0}")]
pub struct CanvasError(pub String);

/// Drawing surface the renderer paints onto. Coordinates are pixels with the
/// origin at the top-left corner.
pub trait Canvas {
    fn size(&self) -> (u32, u32);
    fn clear(&mut self, color: Rgb) -> Result<(), CanvasError>;
    fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgb) -> Result<(), CanvasError>;
    /// Closed outline through `points`.
    fn stroke_polygon(&mut self, points: &[(i32, i32)], color: Rgb) -> Result<(), CanvasError>;
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb)
        -> Result<(), CanvasError>;
    fn draw_point(&mut self, at: (i32, i32), color: Rgb) -> Result<(), CanvasError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear(Rgb),
    FillPolygon(Vec<(i32, i32)>, Rgb),
    StrokePolygon(Vec<(i32, i32)>, Rgb),
    Line((i32, i32), (i32, i32), Rgb),
    Point((i32, i32), Rgb),
}

/// Canvas that keeps every call as a display list.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Filled polygons in draw order.
    pub fn fills(&self) -> impl Iterator<Item = (&[(i32, i32)], Rgb)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillPolygon(points, color) => Some((points.as_slice(), *color)),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    /// Replays the display list onto another canvas.
    pub fn replay(&self, target: &mut dyn Canvas) -> Result<(), CanvasError> {
        for op in &self.ops {
            match op {
                DrawOp::Clear(color) => target.clear(*color)?,
                DrawOp::FillPolygon(points, color) => target.fill_polygon(points, *color)?,
                DrawOp::StrokePolygon(points, color) => target.stroke_polygon(points, *color)?,
                DrawOp::Line(from, to, color) => target.draw_line(*from, *to, *color)?,
                DrawOp::Point(at, color) => target.draw_point(*at, *color)?,
            }
        }
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) -> Result<(), CanvasError> {
        self.ops.push(DrawOp::Clear(color));
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgb) -> Result<(), CanvasError> {
        self.ops.push(DrawOp::FillPolygon(points.to_vec(), color));
        Ok(())
    }

    fn stroke_polygon(&mut self, points: &[(i32, i32)], color: Rgb) -> Result<(), CanvasError> {
        self.ops.push(DrawOp::StrokePolygon(points.to_vec(), color));
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        color: Rgb,
    ) -> Result<(), CanvasError> {
        self.ops.push(DrawOp::Line(from, to, color));
        Ok(())
    }

    fn draw_point(&mut self, at: (i32, i32), color: Rgb) -> Result<(), CanvasError> {
        self.ops.push(DrawOp::Point(at, color));
        Ok(())
    }
}
