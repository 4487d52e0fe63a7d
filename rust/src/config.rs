//! Configuration for the schedule computation.

use crate::logging::VERBOSITY_SILENT;

/// Relative tolerance used to classify a task as critical when durations are fractional.
pub const DEFAULT_SLACK_TOLERANCE: f64 = 1e-9;

/// Configuration for a single schedule computation.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleConfig {
    /// Verbosity level: 0=silent, 1=summary, 2=tasks, 3=debug.
    pub verbosity: u8,
    /// A task is critical when `|slack| <= slack_tolerance * max(|completion_time|, 1)`.
    /// Must be finite and non-negative.
    pub slack_tolerance: f64,
    /// Reject negative or non-finite durations before scheduling.
    pub validate_durations: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            verbosity: VERBOSITY_SILENT,
            slack_tolerance: DEFAULT_SLACK_TOLERANCE,
            validate_durations: true,
        }
    }
}

impl ScheduleConfig {
    /// Same configuration with a different verbosity.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Largest difference still treated as zero for times of magnitude `scale`.
    ///
    /// The tolerance is relative, so rounding noise in `(start + duration) - duration`
    /// stays below the threshold however large the schedule times get.
    #[inline]
    pub fn zero_slack_threshold(&self, scale: f64) -> f64 {
        self.slack_tolerance * scale.abs().max(1.0)
    }

    /// Whether a slack value counts as zero in a schedule of magnitude `scale`.
    #[inline]
    pub fn is_zero_slack(&self, slack: f64, scale: f64) -> bool {
        slack.abs() <= self.zero_slack_threshold(scale)
    }

    /// Whether `slack_tolerance` is usable (finite and non-negative).
    pub fn has_valid_tolerance(&self) -> bool {
        self.slack_tolerance.is_finite() && self.slack_tolerance >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ScheduleConfig::default();
        assert_eq!(config.verbosity, 0);
        assert!((config.slack_tolerance - 1e-9).abs() < 1e-15);
        assert!(config.validate_durations);
    }

    #[test]
    fn test_zero_slack_within_tolerance() {
        let config = ScheduleConfig::default();
        assert!(config.is_zero_slack(0.0, 10.0));
        assert!(config.is_zero_slack(-1e-12, 10.0));
        assert!(config.is_zero_slack(5e-10, 0.0));
        assert!(!config.is_zero_slack(1e-6, 10.0));
        assert!(!config.is_zero_slack(3.0, 10.0));
    }

    #[test]
    fn test_zero_slack_threshold_scales_with_magnitude() {
        let config = ScheduleConfig::default();
        // One ulp near 3e8 is about 6e-8, far above the absolute tolerance
        assert!(config.is_zero_slack(-5.96e-8, 3.2e8));
        assert!(!config.is_zero_slack(-5.96e-8, 10.0));
        assert!(!config.is_zero_slack(1.0, 3.2e8));
        assert_eq!(config.zero_slack_threshold(-2.0), 2e-9);
        assert_eq!(config.zero_slack_threshold(0.5), 1e-9);
    }

    #[test]
    fn test_tolerance_validity() {
        assert!(ScheduleConfig::default().has_valid_tolerance());
        for bad in [-1e-9, f64::NAN, f64::INFINITY] {
            let config = ScheduleConfig {
                slack_tolerance: bad,
                ..ScheduleConfig::default()
            };
            assert!(!config.has_valid_tolerance());
        }
    }

    #[test]
    fn test_with_verbosity() {
        let config = ScheduleConfig::default().with_verbosity(2);
        assert_eq!(config.verbosity, 2);
        assert!(config.validate_durations);
    }
}
