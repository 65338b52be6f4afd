//! Board → drawing commands.
//!
//! Painting goes through the `Canvas` trait, a small retained-mode graphics
//! surface (clear, path, stroke, circle, fill). Hosts implement it over their
//! renderer; `DisplayList` records the commands for replay and tests.

use dots_core::{Board, Color, DotNode, LineTone, Sketch};
use kurbo::{Point, Vec2};

/// A drawing surface.
pub trait Canvas {
    /// Drop everything drawn so far.
    fn clear(&mut self);
    fn set_stroke(&mut self, color: Color, width: f64);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    /// Stroke the current path with the current stroke settings.
    fn stroke(&mut self);
    fn circle(&mut self, center: Point, radius: f64);
    /// Fill the current path with the stroke color.
    fn fill(&mut self);
}

// ─── Theme ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub grid: Color,
    pub grid_width: f64,
    pub provisional: Color,
    pub committed: Color,
    pub rejected: Color,
    pub line_width: f64,
    /// Radius of the filled knob at a line's end.
    pub knob_radius: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            grid: Color::GRAY,
            grid_width: 2.0,
            provisional: Color::CYAN,
            committed: Color::GRAY,
            rejected: Color::GRAY,
            line_width: 10.0,
            knob_radius: 5.0,
        }
    }
}

impl Theme {
    pub fn color_for(&self, tone: LineTone) -> Color {
        match tone {
            LineTone::Provisional => self.provisional,
            LineTone::Committed => self.committed,
            LineTone::Rejected => self.rejected,
        }
    }
}

// ─── Painters ────────────────────────────────────────────────────────────────

/// Stroke the grid outline in world space.
pub fn paint_grid<C: Canvas + ?Sized>(canvas: &mut C, board: &Board, theme: &Theme) {
    let lines = board.grid_lines();
    if lines.is_empty() {
        return;
    }
    canvas.set_stroke(theme.grid, theme.grid_width);
    for line in &lines {
        canvas.move_to(line.p0);
        canvas.line_to(line.p1);
    }
    canvas.stroke();
    log::trace!("PAINT grid: {} lines", lines.len());
}

/// Repaint a dot on its own canvas, in dot-local space.
///
/// The canvas is cleared first, so only the dot's latest line remains.
pub fn paint_dot<C: Canvas + ?Sized>(canvas: &mut C, dot: &DotNode, theme: &Theme) {
    canvas.clear();
    if let Some(sketch) = &dot.sketch {
        paint_sketch(canvas, Vec2::ZERO, sketch, theme);
    }
}

/// Paint the whole board onto one world-space canvas.
pub fn paint_board<C: Canvas + ?Sized>(canvas: &mut C, board: &Board, theme: &Theme) {
    canvas.clear();
    paint_grid(canvas, board, theme);
    for dot in board.dots() {
        if let Some(sketch) = &dot.sketch {
            paint_sketch(canvas, dot.position.to_vec2(), sketch, theme);
        }
    }
}

fn paint_sketch<C: Canvas + ?Sized>(canvas: &mut C, offset: Vec2, sketch: &Sketch, theme: &Theme) {
    let from = Point::ZERO + offset;
    let to = from + sketch.to;
    canvas.set_stroke(theme.color_for(sketch.tone), theme.line_width);
    canvas.move_to(from);
    canvas.line_to(to);
    canvas.stroke();
    canvas.circle(to, theme.knob_radius);
    canvas.fill();
}

// ─── Display list ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear,
    SetStroke { color: Color, width: f64 },
    MoveTo(Point),
    LineTo(Point),
    Stroke,
    Circle { center: Point, radius: f64 },
    Fill,
}

/// A `Canvas` that records every command.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub cmds: Vec<DrawCmd>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each `MoveTo → LineTo` pair, in recording order.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.cmds
            .windows(2)
            .filter_map(|w| match (&w[0], &w[1]) {
                (DrawCmd::MoveTo(a), DrawCmd::LineTo(b)) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }

    /// Colors passed to `set_stroke`, in order.
    pub fn stroke_colors(&self) -> Vec<Color> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::SetStroke { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for DisplayList {
    fn clear(&mut self) {
        self.cmds.clear();
        self.cmds.push(DrawCmd::Clear);
    }

    fn set_stroke(&mut self, color: Color, width: f64) {
        self.cmds.push(DrawCmd::SetStroke { color, width });
    }

    fn move_to(&mut self, p: Point) {
        self.cmds.push(DrawCmd::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.cmds.push(DrawCmd::LineTo(p));
    }

    fn stroke(&mut self) {
        self.cmds.push(DrawCmd::Stroke);
    }

    fn circle(&mut self, center: Point, radius: f64) {
        self.cmds.push(DrawCmd::Circle { center, radius });
    }

    fn fill(&mut self) {
        self.cmds.push(DrawCmd::Fill);
    }
}
