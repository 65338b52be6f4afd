pub mod drag;
pub mod input;
pub mod session;
pub mod setup;
