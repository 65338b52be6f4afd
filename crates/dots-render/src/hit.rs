//! Hit testing: point → dot lookup.
//!
//! Scans dots in spawn order and returns the first one whose world position
//! is strictly within the radius. Overlapping hits resolve to the earliest
//! spawned dot, not the nearest.

use dots_core::{Board, DotNode};
use kurbo::Point;

pub const DEFAULT_HIT_RADIUS: f64 = 30.0;

/// Find the dot under world position `point`.
/// Returns `None` if no dot is within `radius`.
pub fn find_dot_at(board: &Board, point: Point, radius: f64) -> Option<&DotNode> {
    let hit = board
        .dots()
        .iter()
        .find(|dot| dot.position.distance(point) < radius);
    log::trace!(
        "hit test ({:.1}, {:.1}) → {:?}",
        point.x,
        point.y,
        hit.map(|d| d.coord())
    );
    hit
}
