//! Play session: owns the board and routes input to per-dot drag handlers.
//!
//! - **Input → handlers**: a pointer-down claims the dot under it; later
//!   move/up/cancel events go to that dot's `DotDrag` until released.
//! - **Handlers → board**: handlers only read the board and return
//!   `BoardMutation`s, which the session applies in order.

use crate::drag::{DotDrag, DragHandler};
use crate::input::InputEvent;
use crate::setup::SetupForm;
use dots_core::{Board, Dimensions, DotNode, GridConfig, GridCoord, GridError, LineTone, Sketch};
use dots_render::hit::find_dot_at;
use kurbo::Point;

/// A change requested by a drag handler.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardMutation {
    /// Replace the line a dot displays.
    SetSketch {
        dot: GridCoord,
        sketch: Option<Sketch>,
    },
    /// Commit a connection; the board re-validates it.
    Connect { from: GridCoord, to: GridCoord },
}

pub struct Session {
    config: GridConfig,
    board: Board,
    form: SetupForm,
    /// One handler per dot, in spawn order.
    handlers: Vec<DotDrag>,
    /// Dot whose gesture is in progress.
    pointer_owner: Option<GridCoord>,
}

impl Session {
    /// Spawn a grid from `config`.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimensions` if rows or columns is outside `1..=MAX_DIMENSION`.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        let board = Board::spawn(&config)?;
        let handlers = build_handlers(&board, &config);
        Ok(Self {
            config,
            board,
            form: SetupForm::new(),
            handlers,
            pointer_owner: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn form(&self) -> &SetupForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SetupForm {
        &mut self.form
    }

    pub fn handler(&self, coord: GridCoord) -> Option<&DotDrag> {
        self.board.index_of(coord).map(|i| &self.handlers[i])
    }

    pub fn pointer_owner(&self) -> Option<GridCoord> {
        self.pointer_owner
    }

    /// First dot (in spawn order) within the configured hit radius of `point`.
    pub fn find_dot_at(&self, point: Point) -> Option<&DotNode> {
        find_dot_at(&self.board, point, self.config.hit_radius)
    }

    // ─── Configuration ───────────────────────────────────────────────────

    /// Submit the setup form and respawn the grid at the entered size.
    ///
    /// # Errors
    /// Propagates the form's parse, validation, or locked error; the grid is
    /// unchanged.
    pub fn submit(&mut self) -> Result<Dimensions, GridError> {
        let dims = self.form.submit()?;
        self.respawn(dims)?;
        Ok(dims)
    }

    /// Validate raw dimensions and respawn the grid.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimensions` for values outside
    /// `1..=MAX_DIMENSION`; the grid is unchanged.
    pub fn configure(&mut self, rows: i64, columns: i64) -> Result<Dimensions, GridError> {
        let dims = Dimensions::new(rows, columns)?;
        self.respawn(dims)?;
        Ok(dims)
    }

    fn respawn(&mut self, dims: Dimensions) -> Result<(), GridError> {
        let config = self.config.with_dimensions(dims);
        self.board.respawn(&config)?;
        self.handlers = build_handlers(&self.board, &config);
        self.config = config;
        self.pointer_owner = None;
        Ok(())
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Route an input event. Returns true if the board changed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { x, y } => {
                let mut changed = false;
                if let Some(prev) = self.pointer_owner.take() {
                    changed |= self.dispatch(prev, |h, _| h.on_drag_cancel());
                }
                let Some(hit) = self.find_dot_at(Point::new(x, y)).map(|d| d.coord()) else {
                    return changed;
                };
                self.pointer_owner = Some(hit);
                changed | self.dispatch(hit, |h, _| h.on_drag_start())
            }
            InputEvent::PointerMove { x, y } => match self.pointer_owner {
                Some(owner) => self.dispatch(owner, |h, b| h.on_drag_move(b, Point::new(x, y))),
                None => false,
            },
            InputEvent::PointerUp { x, y } => match self.pointer_owner.take() {
                Some(owner) => self.dispatch(owner, |h, b| h.on_drag_end(b, Point::new(x, y))),
                None => false,
            },
            InputEvent::PointerCancel => match self.pointer_owner.take() {
                Some(owner) => self.dispatch(owner, |h, _| h.on_drag_cancel()),
                None => false,
            },
        }
    }

    /// Broadcast a cancel to every dot. Returns true if the board changed.
    pub fn cancel_all(&mut self) -> bool {
        self.pointer_owner = None;
        let mutations: Vec<BoardMutation> = self
            .handlers
            .iter_mut()
            .flat_map(|h| h.on_drag_cancel())
            .collect();
        self.apply_all(mutations)
    }

    fn dispatch<F>(&mut self, coord: GridCoord, f: F) -> bool
    where
        F: FnOnce(&mut DotDrag, &Board) -> Vec<BoardMutation>,
    {
        let Some(i) = self.board.index_of(coord) else {
            return false;
        };
        let mutations = f(&mut self.handlers[i], &self.board);
        self.apply_all(mutations)
    }

    fn apply_all(&mut self, mutations: Vec<BoardMutation>) -> bool {
        mutations
            .into_iter()
            .fold(false, |changed, m| self.apply_mutation(m) | changed)
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Apply one mutation. Returns true if the board changed.
    pub fn apply_mutation(&mut self, mutation: BoardMutation) -> bool {
        match mutation {
            BoardMutation::SetSketch { dot, sketch } => self.board.set_sketch(dot, sketch),
            BoardMutation::Connect { from, to } => match self.board.connect(from, to) {
                Ok(_) => {
                    let offset = match (self.board.dot(from), self.board.dot(to)) {
                        (Some(a), Some(b)) => a.to_local(b.position),
                        _ => return true,
                    };
                    self.board.set_sketch(
                        from,
                        Some(Sketch {
                            to: offset,
                            tone: LineTone::Committed,
                        }),
                    );
                    true
                }
                Err(reason) => {
                    log::debug!("connection {from} - {to} refused: {reason}");
                    false
                }
            },
        }
    }
}

fn build_handlers(board: &Board, config: &GridConfig) -> Vec<DotDrag> {
    board
        .dots()
        .iter()
        .map(|d| DotDrag::new(d.coord(), config.hit_radius))
        .collect()
}
