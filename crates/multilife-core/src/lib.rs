//! Core types and utilities for the multilife multi-species cellular automaton.

pub mod config;
pub mod error;
pub mod types;

pub use config::WorldConfig;
pub use error::{Error, Result};
pub use types::*;
