//! World state and evolution engine.
//!
//! This crate implements the square multi-species board and the
//! generation-stepping rule that evolves it.

pub mod engine;
pub mod grid;
pub mod observer;

pub use engine::Engine;
pub use grid::Grid;
pub use observer::{GenerationObserver, NullObserver};
