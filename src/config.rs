use crate::error::{IsomorphError, Result};
use serde::{Deserialize, Serialize};

/// Tolerances and budgets for isomorph discovery.
///
/// `max_distance` caps the gap between two equal symbols for them to seed
/// an initial group. `nearby` is the slack allowed between two occurrence
/// windows before they are considered unrelated during intersection. Both
/// defaults come from the calibration used on the runic corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Largest seed gap between consecutive equal symbols.
    pub max_distance: usize,
    /// Window slack for the adjacency relation in intersection.
    pub nearby: usize,
    /// Fixed-point rounds allowed before discovery gives up.
    pub max_rounds: usize,
}

impl DiscoveryConfig {
    /// Rejects values that would silently produce empty results or let the
    /// driver run unbounded.
    pub fn validate(&self) -> Result<()> {
        if self.max_distance == 0 {
            return Err(IsomorphError::InvalidConfig(
                "max_distance must be at least 1".into(),
            ));
        }
        if self.max_rounds == 0 {
            return Err(IsomorphError::InvalidConfig(
                "max_rounds must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_distance: 6,
            nearby: 3,
            max_rounds: 512,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DiscoveryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_max_distance_rejected() {
        let config = DiscoveryConfig {
            max_distance: 0,
            ..DiscoveryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(IsomorphError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = DiscoveryConfig {
            max_rounds: 0,
            ..DiscoveryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(IsomorphError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_nearby_allowed() {
        let config = DiscoveryConfig {
            nearby: 0,
            ..DiscoveryConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
