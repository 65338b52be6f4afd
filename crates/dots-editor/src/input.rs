//! Pointer input, in world coordinates.

use kurbo::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    /// The host abandoned the gesture (focus loss, system gesture, ...).
    PointerCancel,
}

impl InputEvent {
    /// Pointer position, if the event carries one.
    pub fn point(&self) -> Option<Point> {
        match *self {
            InputEvent::PointerDown { x, y }
            | InputEvent::PointerMove { x, y }
            | InputEvent::PointerUp { x, y } => Some(Point::new(x, y)),
            InputEvent::PointerCancel => None,
        }
    }
}
