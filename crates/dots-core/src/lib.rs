pub mod board;
pub mod config;
pub mod coord;
pub mod error;
pub mod layout;
pub mod model;

pub use board::{Board, Connection, Rejection};
pub use config::{Dimensions, GridConfig, MAX_DIMENSION};
pub use coord::GridCoord;
pub use error::GridError;
pub use model::*;

// Re-export kurbo geometry so downstream crates don't need a direct dependency
pub use kurbo::{Line, Point, Vec2};
