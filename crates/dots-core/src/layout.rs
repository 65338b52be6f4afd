//! Grid geometry: dot placement and outline lines.

use crate::config::GridConfig;
use crate::coord::GridCoord;
use crate::model::DotNode;
use kurbo::{Line, Point};

/// World position of the dot at `coord`.
pub fn position_for(coord: GridCoord, config: &GridConfig) -> Point {
    Point::new(
        config.origin.0 + config.row_spacing * coord.x as f64,
        config.origin.1 + config.column_spacing * coord.y as f64,
    )
}

/// Outline lines for dots laid out in spawn order.
///
/// One line per column (first to last dot of that column), then one per row.
/// Returns nothing if `dots` does not hold exactly `rows * columns` entries.
pub fn grid_lines(dots: &[DotNode], rows: usize, columns: usize) -> Vec<Line> {
    if rows == 0 || columns == 0 || dots.len() != rows * columns {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(rows + columns);
    for col in 0..columns {
        let start = dots[col * rows].position;
        let end = dots[(col + 1) * rows - 1].position;
        lines.push(Line::new(start, end));
    }
    for row in 0..rows {
        let start = dots[row].position;
        let end = dots[dots.len() - rows + row].position;
        lines.push(Line::new(start, end));
    }
    lines
}
