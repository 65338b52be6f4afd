//! Dot data model.
//!
//! A `DotNode` carries its immutable grid coordinate, its world position,
//! its connection state, and the one line it currently displays.
//! Links between dots live on the `Board`, not on the nodes.

use crate::coord::GridCoord;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const CYAN: Color = Color::rgba(0.0, 1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::rgba(0.5, 0.5, 0.5, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

// ─── Lines ───────────────────────────────────────────────────────────────

/// How a dot's line should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineTone {
    /// Following the pointer during a drag.
    Provisional,
    /// An accepted connection.
    Committed,
    /// A drag that did not produce a connection.
    Rejected,
}

/// The single line a dot displays, from its own origin to `to`.
/// `to` is in dot-local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    pub to: Vec2,
    pub tone: LineTone,
}

// ─── Dots ────────────────────────────────────────────────────────────────

/// Connection state of a dot. Moves `Active → Connected` once, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DotState {
    #[default]
    Active,
    Connected,
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct DotNode {
    coord: GridCoord,
    /// World-space position of the dot's origin.
    pub position: Point,
    state: DotState,
    /// Last line drawn by this dot; each draw replaces the previous one.
    pub sketch: Option<Sketch>,
}

impl DotNode {
    pub fn new(coord: GridCoord, position: Point) -> Self {
        Self {
            coord,
            position,
            state: DotState::Active,
            sketch: None,
        }
    }

    pub fn coord(&self) -> GridCoord {
        self.coord
    }

    pub fn state(&self) -> DotState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == DotState::Connected
    }

    /// Transition to `Connected`. Idempotent.
    pub fn mark_connected(&mut self) {
        self.state = DotState::Connected;
    }

    pub fn is_adjacent(&self, other: &DotNode) -> bool {
        self.coord.is_adjacent(other.coord)
    }

    /// Convert a world-space point into this dot's local space.
    pub fn to_local(&self, world: Point) -> Vec2 {
        world - self.position
    }
}
