//! Monte Carlo power of the Mann-Whitney test by parametric bootstrap: each
//! observed sample is turned into an empirical distribution, oversampled, and
//! repeatedly subsampled back to its original size.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::error::CohortErr;
use crate::hypothesis::compare::check_cohorts;
use crate::hypothesis::mann_whitney::mann_whitney_u;
use crate::observation::types::{Cohort, Variable};
use crate::power::error::PowerErr;
use crate::power::pmf::EmpiricalPmf;
use crate::power::types::{PowerEstimate, PowerSettings};

fn check_settings(settings: &PowerSettings, m: usize, n: usize) -> Result<(), CohortErr> {
    if !(settings.alpha > 0.0 && settings.alpha < 1.0) {
        return Err(PowerErr::BadAlpha(settings.alpha).into());
    }
    if settings.trials == 0 {
        return Err(PowerErr::ZeroTrials.into());
    }
    let largest = m.max(n);
    if settings.synthetic_size < largest {
        return Err(PowerErr::SyntheticTooSmall {
            synthetic_size: settings.synthetic_size,
            sample_size: largest,
        }
        .into());
    }
    Ok(())
}

/// Draws `amount` values without replacement.
fn subsample<R: Rng + ?Sized>(population: &[f64], amount: usize, rng: &mut R) -> Vec<f64> {
    index::sample(rng, population.len(), amount)
        .iter()
        .map(|i| population[i])
        .collect()
}

/// Estimates beta and power for one pair of observed samples.
pub fn estimate_power_for_samples<R: Rng + ?Sized>(
    x: &[f64],
    y: &[f64],
    settings: &PowerSettings,
    rng: &mut R,
) -> Result<PowerEstimate, CohortErr> {
    if x.is_empty() || y.is_empty() {
        return Err(PowerErr::EmptySample.into());
    }
    check_settings(settings, x.len(), y.len())?;

    let pmf_x = EmpiricalPmf::from_sample(
        x,
        settings.support_min,
        settings.support_max,
        settings.smoothing,
    )?;
    let pmf_y = EmpiricalPmf::from_sample(
        y,
        settings.support_min,
        settings.support_max,
        settings.smoothing,
    )?;
    let synthetic_x = pmf_x.sample_n(settings.synthetic_size, rng);
    let synthetic_y = pmf_y.sample_n(settings.synthetic_size, rng);

    let mut not_significant = 0usize;
    for _ in 0..settings.trials {
        let sub_x = subsample(&synthetic_x, x.len(), rng);
        let sub_y = subsample(&synthetic_y, y.len(), rng);
        let result = mann_whitney_u(&sub_x, &sub_y, &settings.mann_whitney)?;
        if result.p_value > settings.alpha {
            not_significant += 1;
        }
    }

    let beta = not_significant as f64 / settings.trials as f64;
    Ok(PowerEstimate {
        beta,
        power: 1. - beta,
        trials: settings.trials,
    })
}

/// Estimates power for every variable in canonical order.
pub fn estimate_power(
    week_1: &Cohort,
    week_2: &Cohort,
    settings: &PowerSettings,
) -> Result<Vec<(Variable, PowerEstimate)>, CohortErr> {
    check_cohorts(week_1, week_2)?;
    check_settings(settings, week_1.len(), week_2.len())?;

    Variable::ALL
        .iter()
        .enumerate()
        .map(|(i, &variable)| -> Result<(Variable, PowerEstimate), CohortErr> {
            let mut rng = match settings.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                None => StdRng::from_entropy(),
            };
            let estimate = estimate_power_for_samples(
                &week_1.column(variable),
                &week_2.column(variable),
                settings,
                &mut rng,
            )?;
            tracing::info!(
                variable = variable.column_name(),
                beta = estimate.beta,
                power = estimate.power,
                trials = estimate.trials,
                "estimated power"
            );
            Ok((variable, estimate))
        })
        .collect()
}
