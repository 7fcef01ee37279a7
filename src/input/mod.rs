//! Input processing module
//! Handles file detection and loading of raw JSON records

pub mod file_detector;
pub mod manager;

pub use manager::{InputManager, STDIN_SOURCE};
