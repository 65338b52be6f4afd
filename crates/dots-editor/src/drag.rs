//! Drag-to-connect gesture handling.
//!
//! Every dot owns a `DotDrag` that turns its drag callbacks into
//! `BoardMutation`s. The board is only read: to hit-test the release point
//! and to check the candidate connection. The `Session` applies the result.
//!
//! | Callback | Effect |
//! |----------|--------|
//! | start  | begin dragging, forget the provisional line |
//! | move   | provisional line from the dot to the pointer |
//! | end    | `Connect` on a valid target, else redraw the line as rejected |
//! | cancel | redraw the line as rejected |

use crate::session::BoardMutation;
use dots_core::{Board, GridCoord, LineTone, Sketch};
use dots_render::hit::find_dot_at;
use kurbo::{Point, Vec2};

/// Input capability of a single dot, independent of any rendering host.
pub trait DragHandler {
    fn on_drag_start(&mut self) -> Vec<BoardMutation>;

    fn on_drag_move(&mut self, board: &Board, world: Point) -> Vec<BoardMutation>;

    fn on_drag_end(&mut self, board: &Board, world: Point) -> Vec<BoardMutation>;

    fn on_drag_cancel(&mut self) -> Vec<BoardMutation>;
}

/// Gesture state for one dot.
#[derive(Debug, Clone, PartialEq)]
pub struct DotDrag {
    coord: GridCoord,
    hit_radius: f64,
    dragging: bool,
    /// Pointer position from the last move, in dot-local space.
    current_line: Option<Vec2>,
}

impl DotDrag {
    pub fn new(coord: GridCoord, hit_radius: f64) -> Self {
        Self {
            coord,
            hit_radius,
            dragging: false,
            current_line: None,
        }
    }

    pub fn coord(&self) -> GridCoord {
        self.coord
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn current_line(&self) -> Option<Vec2> {
        self.current_line
    }

    /// Target of a release at `world`, if it forms a new valid connection.
    fn connection_target(&self, board: &Board, world: Point) -> Option<GridCoord> {
        let origin = board.dot(self.coord)?;
        let target = find_dot_at(board, world, self.hit_radius)?;
        let to = target.coord();
        (to != self.coord && origin.is_adjacent(target) && !board.is_connected(self.coord, to))
            .then_some(to)
    }

    fn redraw_rejected(&self) -> Vec<BoardMutation> {
        match self.current_line {
            Some(to) => vec![BoardMutation::SetSketch {
                dot: self.coord,
                sketch: Some(Sketch {
                    to,
                    tone: LineTone::Rejected,
                }),
            }],
            None => vec![],
        }
    }
}

impl DragHandler for DotDrag {
    fn on_drag_start(&mut self) -> Vec<BoardMutation> {
        self.dragging = true;
        self.current_line = None;
        vec![]
    }

    fn on_drag_move(&mut self, board: &Board, world: Point) -> Vec<BoardMutation> {
        if !self.dragging {
            return vec![];
        }
        let Some(local) = board.local_point(self.coord, world) else {
            return vec![];
        };
        log::trace!("drag {} → local ({:.1}, {:.1})", self.coord, local.x, local.y);
        self.current_line = Some(local);
        vec![BoardMutation::SetSketch {
            dot: self.coord,
            sketch: Some(Sketch {
                to: local,
                tone: LineTone::Provisional,
            }),
        }]
    }

    fn on_drag_end(&mut self, board: &Board, world: Point) -> Vec<BoardMutation> {
        if !self.dragging {
            return vec![];
        }
        self.dragging = false;

        match self.connection_target(board, world) {
            Some(to) => vec![BoardMutation::Connect {
                from: self.coord,
                to,
            }],
            None => self.redraw_rejected(),
        }
    }

    fn on_drag_cancel(&mut self) -> Vec<BoardMutation> {
        self.dragging = false;
        self.redraw_rejected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dots_core::GridConfig;
    use pretty_assertions::assert_eq;

    fn board() -> Board {
        Board::spawn(&GridConfig {
            rows: 3,
            columns: 3,
            ..GridConfig::default()
        })
        .unwrap()
    }

    fn drag_for(coord: GridCoord) -> DotDrag {
        DotDrag::new(coord, GridConfig::default().hit_radius)
    }

    #[test]
    fn move_without_start_is_ignored() {
        let b = board();
        let mut drag = drag_for(GridCoord::new(0, 0));
        assert!(drag.on_drag_move(&b, Point::new(0.0, 0.0)).is_empty());
        assert!(drag.current_line().is_none());
    }

    #[test]
    fn move_emits_provisional_line_in_local_space() {
        let b = board();
        let mut drag = drag_for(GridCoord::new(0, 0));
        drag.on_drag_start();
        let muts = drag.on_drag_move(&b, Point::new(-70.0, -90.0));
        assert_eq!(
            muts,
            vec![BoardMutation::SetSketch {
                dot: GridCoord::new(0, 0),
                sketch: Some(Sketch {
                    to: Vec2::new(30.0, 10.0),
                    tone: LineTone::Provisional,
                }),
            }]
        );
    }

    #[test]
    fn release_on_adjacent_dot_connects() {
        let b = board();
        let mut drag = drag_for(GridCoord::new(0, 0));
        drag.on_drag_start();
        drag.on_drag_move(&b, Point::new(-45.0, -100.0));
        let muts = drag.on_drag_end(&b, Point::new(-42.0, -98.0));
        assert_eq!(
            muts,
            vec![BoardMutation::Connect {
                from: GridCoord::new(0, 0),
                to: GridCoord::new(1, 0),
            }]
        );
        assert!(!drag.is_dragging());
    }

    #[test]
    fn release_on_diagonal_dot_is_rejected() {
        let b = board();
        let mut drag = drag_for(GridCoord::new(0, 0));
        drag.on_drag_start();
        drag.on_drag_move(&b, Point::new(-40.0, -40.0));
        let muts = drag.on_drag_end(&b, Point::new(-40.0, -40.0));
        assert_eq!(
            muts,
            vec![BoardMutation::SetSketch {
                dot: GridCoord::new(0, 0),
                sketch: Some(Sketch {
                    to: Vec2::new(60.0, 60.0),
                    tone: LineTone::Rejected,
                }),
            }]
        );
    }

    #[test]
    fn release_on_self_or_empty_space_without_line_does_nothing() {
        let b = board();
        let mut drag = drag_for(GridCoord::new(1, 1));
        drag.on_drag_start();
        assert!(drag.on_drag_end(&b, Point::new(-40.0, -40.0)).is_empty());
        drag.on_drag_start();
        assert!(drag.on_drag_end(&b, Point::new(900.0, 900.0)).is_empty());
    }

    #[test]
    fn release_on_already_connected_dot_is_rejected() {
        let mut b = board();
        b.connect(GridCoord::new(0, 0), GridCoord::new(0, 1)).unwrap();
        let mut drag = drag_for(GridCoord::new(0, 0));
        drag.on_drag_start();
        drag.on_drag_move(&b, Point::new(-100.0, -50.0));
        let muts = drag.on_drag_end(&b, Point::new(-100.0, -40.0));
        assert!(matches!(
            muts.as_slice(),
            [BoardMutation::SetSketch {
                sketch: Some(Sketch {
                    tone: LineTone::Rejected,
                    ..
                }),
                ..
            }]
        ));
    }

    #[test]
    fn cancel_reverts_line_and_stops_dragging() {
        let b = board();
        let mut drag = drag_for(GridCoord::new(2, 2));
        assert!(drag.on_drag_cancel().is_empty());

        drag.on_drag_start();
        drag.on_drag_move(&b, Point::new(30.0, 30.0));
        let muts = drag.on_drag_cancel();
        assert_eq!(muts.len(), 1);
        assert!(!drag.is_dragging());
        // A later release is ignored.
        assert!(drag.on_drag_end(&b, Point::new(20.0, -20.0)).is_empty());
    }

    #[test]
    fn start_forgets_previous_line() {
        let b = board();
        let mut drag = drag_for(GridCoord::new(0, 0));
        drag.on_drag_start();
        drag.on_drag_move(&b, Point::new(-90.0, -90.0));
        drag.on_drag_cancel();
        drag.on_drag_start();
        assert!(drag.current_line().is_none());
        assert!(drag.on_drag_cancel().is_empty());
    }
}
