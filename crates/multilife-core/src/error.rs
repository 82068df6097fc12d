//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Board size must be positive, got {0}")]
    InvalidSize(usize),

    #[error("Species count must be positive, got {0}")]
    InvalidSpeciesCount(u8),

    #[error("Grid dimension mismatch: expected {expected} cells, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Species index {species} out of range for {species_count} species")]
    SpeciesOutOfRange { species: u8, species_count: u8 },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
