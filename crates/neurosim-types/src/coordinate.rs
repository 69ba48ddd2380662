//! Coordinates in the simulation plane.
//!
//! Spatial queries are generic over a [`Coordinate`] type so the same scan
//! logic serves any 2D representation. [`Vec2`] is the continuous position
//! used by boids and query callers; [`GridCell`] is the integer cell a graph
//! node occupies.

use serde::{Deserialize, Serialize};

/// A point in the 2D simulation plane.
///
/// Implementors supply component access and construction; distance and
/// squared distance are derived from those.
pub trait Coordinate: Copy + PartialEq + Send + Sync + core::fmt::Debug {
    /// Construct a coordinate from its components.
    fn from_xy(x: f32, y: f32) -> Self;

    /// Horizontal component.
    fn x(self) -> f32;

    /// Vertical component.
    fn y(self) -> f32;

    /// Squared Euclidean distance to `other`.
    fn distance_squared(self, other: Self) -> f32 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to `other`.
    fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Whether both components are finite.
    fn is_finite(self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

/// A continuous 2D position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// Create a position from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Coordinate for Vec2 {
    fn from_xy(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn x(self) -> f32 {
        self.x
    }

    fn y(self) -> f32 {
        self.y
    }
}

/// Integer cell of a node in the dense grid graph.
///
/// Column `x` lies in `[0, max_x)` and row `y` in `[0, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl GridCell {
    /// Create a cell from column and row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The cell's position expressed in coordinate type `C`.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_coordinate<C: Coordinate>(self) -> C {
        C::from_xy(self.x as f32, self.y as f32)
    }
}

impl core::fmt::Display for GridCell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
