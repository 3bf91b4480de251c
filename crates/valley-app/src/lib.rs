//! Application layer for the Waves and Valleys demo.
//!
//! Ties the terrain, render, input, and config crates together behind a winit
//! event loop.

pub mod frame_stats;
pub mod window;

pub use frame_stats::{FrameSample, FrameStats, title_with_stats};
pub use window::{AppState, run, window_attributes_from_config};
