//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// World configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Side length of the square board
    pub size: usize,
    /// Number of distinct species, indices `0..species_count`
    pub species_count: u8,
    /// Number of generations to evolve
    pub generations: u64,
    /// Random seed for birth tie-breaks
    pub seed: u64,
}

impl WorldConfig {
    /// Reject configurations the engine has no defined behavior for.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidSize(self.size));
        }
        if self.species_count == 0 {
            return Err(Error::InvalidSpeciesCount(self.species_count));
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 16,
            species_count: 1,
            generations: 100,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.size, 16);
        assert_eq!(config.species_count, 1);
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = WorldConfig {
            size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn test_zero_species_rejected() {
        let config = WorldConfig {
            species_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidSpeciesCount(0))
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = WorldConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: WorldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.size, deserialized.size);
        assert_eq!(config.seed, deserialized.seed);
    }
}
