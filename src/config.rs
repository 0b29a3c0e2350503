use serde::{Deserialize, Serialize};

use crate::error::RaceError;
use crate::race::MIN_DISTANCE_KM;
use crate::rng::SimRng;

/// Race settings. Anything left out falls back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Kilometres to the finish line.
    #[serde(default = "default_distance")]
    pub distance: f64,

    /// Fixed seed for a reproducible race.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_name() -> String {
    "GranPrix".to_string()
}

const fn default_distance() -> f64 {
    MIN_DISTANCE_KM
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            distance: default_distance(),
            seed: None,
        }
    }
}

impl RaceConfig {
    pub fn validate(&self) -> Result<(), RaceError> {
        if !(self.distance >= MIN_DISTANCE_KM) {
            return Err(RaceError::DistanceTooShort {
                min: MIN_DISTANCE_KM,
                got: self.distance,
            });
        }
        Ok(())
    }

    /// The race's random source: seeded if a seed was given.
    pub fn rng(&self) -> SimRng {
        self.seed
            .map_or_else(SimRng::from_entropy, SimRng::from_seed_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomSource;

    #[test]
    fn missing_fields_use_defaults() {
        let config: RaceConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(
            config,
            RaceConfig {
                seed: Some(9),
                ..RaceConfig::default()
            }
        );
        assert_eq!(config.name, "GranPrix");
        assert_eq!(config.distance, 1000.0);
    }

    #[test]
    fn short_distances_are_rejected() {
        let config = RaceConfig {
            distance: 500.0,
            ..RaceConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(RaceConfig::default().validate().is_ok());
    }

    #[test]
    fn seeded_configs_replay() {
        let config = RaceConfig {
            seed: Some(11),
            ..RaceConfig::default()
        };
        assert_eq!(config.rng().roll(0..=1_000_000), config.rng().roll(0..=1_000_000));
    }
}
