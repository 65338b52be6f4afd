//! The board: every dot of a spawned grid, plus two coordinate-keyed graphs.
//!
//! - **lattice**: the wired grid adjacency, rebuilt on every spawn.
//! - **links**: connections the player has committed by dragging.
//!
//! Both are `UnGraphMap`s keyed by `GridCoord`, so an edge can only exist
//! once no matter how often it is added.

use crate::config::{Dimensions, GridConfig};
use crate::coord::GridCoord;
use crate::error::GridError;
use crate::layout::{grid_lines, position_for};
use crate::model::{DotNode, Sketch};
use kurbo::{Line, Point, Vec2};
use petgraph::graphmap::UnGraphMap;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

/// A committed connection between two adjacent dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: GridCoord,
    pub to: GridCoord,
}

/// Why a connection attempt was refused. Refusals leave the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    UnknownDot(GridCoord),
    SelfLink,
    NotAdjacent,
    AlreadyConnected,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UnknownDot(c) => write!(f, "no dot at {c}"),
            Rejection::SelfLink => write!(f, "a dot cannot connect to itself"),
            Rejection::NotAdjacent => write!(f, "dots are not adjacent"),
            Rejection::AlreadyConnected => write!(f, "dots are already connected"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    dims: Option<Dimensions>,
    /// Dots in spawn order: flat index = `y * rows + x`.
    dots: Vec<DotNode>,
    index: HashMap<GridCoord, usize>,
    lattice: UnGraphMap<GridCoord, ()>,
    links: UnGraphMap<GridCoord, ()>,
}

impl Board {
    /// An empty board with no dots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from `config`.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimensions` if rows or columns is outside `1..=MAX_DIMENSION`.
    pub fn spawn(config: &GridConfig) -> Result<Self, GridError> {
        let mut board = Self::new();
        board.respawn(config)?;
        Ok(board)
    }

    /// Discard every dot and link, then lay out a fresh grid.
    ///
    /// Dimensions are validated first; on error the current grid is kept.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimensions` if rows or columns is outside `1..=MAX_DIMENSION`.
    pub fn respawn(&mut self, config: &GridConfig) -> Result<(), GridError> {
        let dims = config.dimensions()?;

        self.dots.clear();
        self.index.clear();
        self.lattice.clear();
        self.links.clear();
        self.dots.reserve(dims.len());

        for y in 0..dims.columns {
            for x in 0..dims.rows {
                let coord = GridCoord::new(x, y);
                self.index.insert(coord, self.dots.len());
                self.dots.push(DotNode::new(coord, position_for(coord, config)));
                self.lattice.add_node(coord);
            }
        }
        self.dims = Some(dims);
        self.wire_adjacency();

        log::debug!(
            "spawned {}×{} grid: {} dots, {} lattice edges",
            dims.rows,
            dims.columns,
            self.dots.len(),
            self.lattice.edge_count()
        );
        Ok(())
    }

    /// Link every dot to its next row and next column neighbour.
    ///
    /// Safe to call repeatedly: the lattice never holds an edge twice.
    pub fn wire_adjacency(&mut self) {
        let Some(dims) = self.dims else {
            return;
        };
        let rows = dims.rows as usize;

        for (i, dot) in self.dots.iter().enumerate() {
            let coord = dot.coord();
            if coord.x + 1 < dims.rows
                && let Some(next) = self.dots.get(i + 1)
            {
                self.lattice.add_edge(coord, next.coord(), ());
            }
            if coord.y + 1 < dims.columns
                && let Some(below) = self.dots.get(i + rows)
            {
                self.lattice.add_edge(coord, below.coord(), ());
            }
        }
    }

    /// Commit a connection between two dots.
    ///
    /// # Errors
    /// Returns the `Rejection` reason if either dot is missing, the dots are
    /// the same, not adjacent, or already linked. Nothing is mutated then.
    pub fn connect(&mut self, from: GridCoord, to: GridCoord) -> Result<Connection, Rejection> {
        let from_idx = self.index_of(from).ok_or(Rejection::UnknownDot(from))?;
        let to_idx = self.index_of(to).ok_or(Rejection::UnknownDot(to))?;
        if from == to {
            return Err(Rejection::SelfLink);
        }
        if !from.is_adjacent(to) {
            return Err(Rejection::NotAdjacent);
        }
        if self.is_connected(from, to) {
            return Err(Rejection::AlreadyConnected);
        }

        self.links.add_edge(from, to, ());
        self.dots[from_idx].mark_connected();
        self.dots[to_idx].mark_connected();
        log::debug!("connected {from} - {to}");
        Ok(Connection { from, to })
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dims
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// All dots in spawn order.
    pub fn dots(&self) -> &[DotNode] {
        &self.dots
    }

    pub fn dot(&self, coord: GridCoord) -> Option<&DotNode> {
        self.index_of(coord).map(|i| &self.dots[i])
    }

    pub(crate) fn dot_mut(&mut self, coord: GridCoord) -> Option<&mut DotNode> {
        self.index_of(coord).map(|i| &mut self.dots[i])
    }

    pub fn dot_at_index(&self, i: usize) -> Option<&DotNode> {
        self.dots.get(i)
    }

    pub fn index_of(&self, coord: GridCoord) -> Option<usize> {
        self.index.get(&coord).copied()
    }

    pub fn contains_coord(&self, coord: GridCoord) -> bool {
        self.index.contains_key(&coord)
    }

    /// Dots this one has committed connections to, in spawn order.
    pub fn neighbors(&self, coord: GridCoord) -> SmallVec<[GridCoord; 4]> {
        sorted_neighbors(&self.links, coord)
    }

    /// Dots wired next to this one in the grid lattice, in spawn order.
    pub fn lattice_neighbors(&self, coord: GridCoord) -> SmallVec<[GridCoord; 4]> {
        sorted_neighbors(&self.lattice, coord)
    }

    pub fn is_connected(&self, a: GridCoord, b: GridCoord) -> bool {
        self.links.contains_edge(a, b)
    }

    /// Number of committed connections.
    pub fn link_count(&self) -> usize {
        self.links.edge_count()
    }

    pub fn lattice_edge_count(&self) -> usize {
        self.lattice.edge_count()
    }

    /// Every committed connection, each reported once.
    pub fn links(&self) -> impl Iterator<Item = Connection> + '_ {
        self.links
            .all_edges()
            .map(|(from, to, _)| Connection { from, to })
    }

    /// Grid outline segments (one per column, then one per row).
    pub fn grid_lines(&self) -> Vec<Line> {
        match self.dims {
            Some(d) => grid_lines(&self.dots, d.rows as usize, d.columns as usize),
            None => Vec::new(),
        }
    }

    /// `world` relative to the dot at `coord`.
    pub fn local_point(&self, coord: GridCoord, world: Point) -> Option<Vec2> {
        self.dot(coord).map(|d| d.to_local(world))
    }

    /// Replace the line a dot displays.
    pub fn set_sketch(&mut self, coord: GridCoord, sketch: Option<Sketch>) -> bool {
        match self.dot_mut(coord) {
            Some(dot) => {
                dot.sketch = sketch;
                true
            }
            None => false,
        }
    }
}

fn sorted_neighbors(graph: &UnGraphMap<GridCoord, ()>, coord: GridCoord) -> SmallVec<[GridCoord; 4]> {
    if !graph.contains_node(coord) {
        return SmallVec::new();
    }
    let mut out: SmallVec<[GridCoord; 4]> = graph.neighbors(coord).collect();
    out.sort();
    out
}
