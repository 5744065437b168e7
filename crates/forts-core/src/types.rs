//! Fundamental geometric and simulation types.
//!
//! The stage uses screen coordinates: origin at the top-left, +y down,
//! all distances in pixels. One physics step per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{TICK_RATE, TILE_SIZE};

/// Axis-aligned bounding box in stage space.
///
/// Overlap is strict: boxes that merely share an edge do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap test (touching edges do not count).
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Integer grid-cell coordinates. One cell is `TILE_SIZE` pixels square.
///
/// A `CellPos` doubles as a non-owning handle into the tile grid: holders
/// (e.g. a player occupying a cannon) re-resolve it against the grid and
/// must tolerate the tile being gone.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellPos {
    pub col: i32,
    pub row: i32,
}

impl CellPos {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Cell containing the given stage-space point.
    pub fn from_point(p: Vec2) -> Self {
        Self {
            col: (p.x / TILE_SIZE).floor() as i32,
            row: (p.y / TILE_SIZE).floor() as i32,
        }
    }

    /// Top-left corner of the cell in stage space.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.col as f32 * TILE_SIZE, self.row as f32 * TILE_SIZE)
    }

    /// Center of the cell in stage space.
    pub fn center(&self) -> Vec2 {
        self.origin() + Vec2::splat(TILE_SIZE * 0.5)
    }

    /// The cell's bounding box.
    pub fn rect(&self) -> Aabb {
        let origin = self.origin();
        Aabb::new(origin, origin + Vec2::splat(TILE_SIZE))
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Unit vector for a barrel angle in degrees.
///
/// 0° points right, 90° straight up; y is negated because the stage
/// y-axis points down.
pub fn aim_vector(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}
