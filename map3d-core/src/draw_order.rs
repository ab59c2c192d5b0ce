//! Back-to-front traversal of the quad mesh.
//!
//! Without a depth buffer, occlusion comes from painting far quads first.
//! Which corner is far depends on the grid rotation, bucketed into four
//! 90-degree quadrants centered on the compass directions.

use std::ops::Range;

/// Rotation bucket. The name is the grid edge that faces away from the eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `[0, 45) ∪ [315, 360)`
    North,
    /// `[45, 135)`
    East,
    /// `[135, 225)`
    South,
    /// `[225, 315)`
    West,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::North,
        Quadrant::East,
        Quadrant::South,
        Quadrant::West,
    ];

    /// `None` for negative angles and anything from 360 up; those are not
    /// wrapped.
    pub fn from_rotation(degrees: i32) -> Option<Quadrant> {
        match degrees {
            0..=44 | 315..=359 => Some(Quadrant::North),
            45..=134 => Some(Quadrant::East),
            135..=224 => Some(Quadrant::South),
            225..=314 => Some(Quadrant::West),
            _ => None,
        }
    }

    /// Traversal for a grid of `storage_width x storage_height` vertices.
    pub fn draw_order(self, storage_width: usize, storage_height: usize) -> DrawOrder {
        use Direction::{Ascending, Descending};
        let (x, y) = match self {
            Quadrant::North => (Descending, Descending),
            Quadrant::East => (Descending, Ascending),
            Quadrant::South => (Ascending, Ascending),
            Quadrant::West => (Ascending, Descending),
        };
        DrawOrder {
            quadrant: self,
            x: AxisOrder::new(x, storage_width),
            y: AxisOrder::new(y, storage_height),
        }
    }

    /// Whether the incremental path may blank a row's previous quads before
    /// redrawing it. Only holds while rows run across the screen, so a
    /// row's old footprint does not cover quads of other rows drawn later.
    pub fn supports_row_clear(self) -> bool {
        matches!(self, Quadrant::North | Quadrant::South)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Anchor vertices along one axis, far to near. Each anchor forms a quad
/// with the vertex one `step` further along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisOrder {
    pub start: usize,
    pub stop: usize,
    pub step: isize,
}

impl AxisOrder {
    fn new(direction: Direction, vertices: usize) -> Self {
        let last = vertices.saturating_sub(1);
        match direction {
            Direction::Ascending => AxisOrder {
                start: 0,
                stop: last.saturating_sub(1),
                step: 1,
            },
            Direction::Descending => AxisOrder {
                start: last,
                stop: 1.min(last),
                step: -1,
            },
        }
    }

    pub fn direction(&self) -> Direction {
        if self.step > 0 {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    /// Number of quads along the axis.
    pub fn len(&self) -> usize {
        self.start.abs_diff(self.stop) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Anchors from `start` to `stop` inclusive.
    pub fn anchors(&self) -> impl Iterator<Item = usize> {
        let (start, step, len) = (self.start, self.step, self.len());
        (0..len).map(move |k| {
            if step > 0 {
                start + k
            } else {
                start - k
            }
        })
    }

    /// The vertex paired with `anchor`.
    pub fn neighbor(&self, anchor: usize) -> usize {
        if self.step > 0 {
            anchor + 1
        } else {
            anchor - 1
        }
    }

    /// Anchors, in draw order, whose quads touch any storage line in
    /// `lines`.
    pub fn anchors_touching(&self, lines: Range<usize>) -> impl Iterator<Item = usize> + '_ {
        self.anchors().filter(move |&anchor| {
            lines.contains(&anchor) || lines.contains(&self.neighbor(anchor))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOrder {
    pub quadrant: Quadrant,
    pub x: AxisOrder,
    pub y: AxisOrder,
}
