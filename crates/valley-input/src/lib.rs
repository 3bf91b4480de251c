//! Frame-coherent input state built from winit events.
//!
//! The application forwards raw window events here during event collection
//! and queries clean per-frame state (positions, deltas, button and key
//! transitions) during update.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyboardState, RawKeyEvent};
pub use mouse::MouseState;
