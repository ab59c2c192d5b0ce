use std::ops::{Add, Mul, Sub};

/// A point or direction in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vertex {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vertex) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vertex) -> Vertex {
        Vertex {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    pub fn normalized(self) -> Option<Vertex> {
        let len = self.length();
        if len < 1e-12 || !len.is_finite() {
            return None;
        }
        Some(self * (1.0 / len))
    }
}

impl From<[f64; 3]> for Vertex {
    fn from(v: [f64; 3]) -> Self {
        Vertex::new(v[0], v[1], v[2])
    }
}

impl Add for Vertex {
    type Output = Vertex;

    fn add(self, rhs: Vertex) -> Vertex {
        Vertex::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vertex {
    type Output = Vertex;

    fn sub(self, rhs: Vertex) -> Vertex {
        Vertex::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vertex {
    type Output = Vertex;

    fn mul(self, rhs: f64) -> Vertex {
        Vertex::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// A projected vertex: integer pixel position plus the depth value computed
/// alongside it. Depth is not used for occlusion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
    pub depth: f64,
}

impl ScreenPoint {
    pub fn pixel(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
