//----------------------------------------
// power mod types
//----------------------------------------
use crate::hypothesis::types::MannWhitneySettings;
use crate::observation::types::{DOMAIN_MAX, DOMAIN_MIN};

/// Monte Carlo power settings.
///
/// The empirical distribution's support defaults to the whole observation
/// domain, 0 through 5, rather than the 1 through 5 of the survey scale,
/// because generated cohorts contain zeros. Set `support_min` to 1 for the
/// survey scale.
#[derive(Debug, Clone, Copy)]
pub struct PowerSettings {
    /// Base seed; variable i uses `seed + i`. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub alpha: f64,
    pub synthetic_size: usize,
    pub trials: usize,
    /// Laplace smoothing: one pseudo-count for every value in the support.
    pub smoothing: bool,
    pub support_min: i64,
    pub support_max: i64,
    pub mann_whitney: MannWhitneySettings,
}

impl Default for PowerSettings {
    fn default() -> Self {
        Self {
            seed: None,
            alpha: 0.05,
            synthetic_size: 1000,
            trials: 1000,
            smoothing: true,
            support_min: DOMAIN_MIN as i64,
            support_max: DOMAIN_MAX as i64,
            mann_whitney: MannWhitneySettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerEstimate {
    /// Share of trials that were not significant at `alpha`.
    pub beta: f64,
    pub power: f64,
    pub trials: usize,
}
