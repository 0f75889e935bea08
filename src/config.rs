//! Configuration management for community verification

use crate::community::CommunityKind;
use crate::error::{InvalidInput, Result};

/// Evaluation settings shared by the CLI and batch helpers
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Minimum fraction of the graph's nodes a candidate must contain
    pub lower_bound: f64,

    /// Only report candidates satisfying this kind (all candidates if unset)
    pub kind: Option<CommunityKind>,

    /// Number of worker threads (0 = use all available cores)
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lower_bound: 0.0,
            kind: None,
            threads: 0,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(lower_bound: f64, kind: Option<CommunityKind>, threads: usize) -> Self {
        Self {
            lower_bound,
            kind,
            threads,
        }
    }

    /// Reject settings that no evaluator would accept
    pub fn validate(&self) -> Result<()> {
        validate_lower_bound(self.lower_bound)?;
        Ok(())
    }

    /// Resolve the worker count, mapping 0 to the number of available cores
    pub fn worker_threads(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get()
        }
    }
}

/// Check that `lower_bound` is a finite fraction in `[0, 1]`.
pub fn validate_lower_bound(lower_bound: f64) -> Result<f64> {
    if lower_bound.is_finite() && (0.0..=1.0).contains(&lower_bound) {
        Ok(lower_bound)
    } else {
        Err(InvalidInput::LowerBound(lower_bound).into())
    }
}

/// Size threshold `round(node_count * lower_bound)`, halves rounded up.
pub fn size_threshold(node_count: usize, lower_bound: f64) -> usize {
    (node_count as f64 * lower_bound).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound_range() {
        assert!(validate_lower_bound(0.0).is_ok());
        assert!(validate_lower_bound(1.0).is_ok());
        assert!(validate_lower_bound(-0.01).is_err());
        assert!(validate_lower_bound(1.01).is_err());
        assert!(validate_lower_bound(f64::NAN).is_err());
        assert!(validate_lower_bound(f64::INFINITY).is_err());
    }

    #[test]
    fn test_threshold_rounds_half_up() {
        assert_eq!(size_threshold(4, 0.5), 2);
        assert_eq!(size_threshold(5, 0.5), 3);
        assert_eq!(size_threshold(3, 0.5), 2);
        assert_eq!(size_threshold(10, 0.04), 0);
        assert_eq!(size_threshold(10, 1.0), 10);
        assert_eq!(size_threshold(0, 0.7), 0);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.worker_threads() >= 1);
        assert_eq!(Config::new(0.25, None, 3).worker_threads(), 3);
    }
}
