//! Sapper - Engine for the Luzhanqi board game

pub mod core;
pub mod engine;
pub mod heuristics;
pub mod referee;
pub mod utils;

// Re-export commonly used items
pub use core::Board;
pub use engine::Engine;
