pub mod hit;
pub mod paint;

pub use hit::{DEFAULT_HIT_RADIUS, find_dot_at};
pub use paint::{Canvas, DisplayList, DrawCmd, Theme, paint_board, paint_dot, paint_grid};
