use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use rand_distr::{Normal, Poisson};

use crate::error::CohortErr;
use crate::generator::error::GeneratorErr;
use crate::generator::presets::preset_params;
use crate::generator::types::{CorrelationPreset, DistributionKind, DistributionParams};
use crate::observation::types::{Cohort, CohortPair, DOMAIN_MAX, DOMAIN_MIN, Observation};

enum Sampler {
    Normal(Normal<f64>),
    Uniform(Uniform<i64>),
    Poisson(Poisson<f64>),
}

impl Sampler {
    fn new(params: &DistributionParams) -> Result<Self, CohortErr> {
        match *params {
            DistributionParams::Normal { mean, std_dev } => {
                if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
                    return Err(GeneratorErr::InvalidParameters(format!(
                        "normal needs a finite mean and positive std dev; got ({mean}, {std_dev})"
                    ))
                    .into());
                }
                Normal::new(mean, std_dev)
                    .map(Sampler::Normal)
                    .map_err(|e| GeneratorErr::InvalidParameters(e.to_string()).into())
            }
            DistributionParams::Uniform { min, max } => {
                if min > max || (min as f64) < DOMAIN_MIN || (max as f64) > DOMAIN_MAX {
                    return Err(GeneratorErr::InvalidParameters(format!(
                        "uniform bounds should satisfy {DOMAIN_MIN} <= min <= max <= {DOMAIN_MAX}; \
                         got [{min}, {max}]"
                    ))
                    .into());
                }
                Ok(Sampler::Uniform(Uniform::new_inclusive(min, max)))
            }
            DistributionParams::Poisson { rate } => Poisson::new(rate)
                .map(Sampler::Poisson)
                .map_err(|e| GeneratorErr::InvalidParameters(format!("{e} (rate {rate})")).into()),
        }
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Sampler::Normal(d) => clamp_truncate(d.sample(rng)),
            Sampler::Uniform(d) => d.sample(rng) as f64,
            Sampler::Poisson(d) => clamp_truncate(d.sample(rng)),
        }
    }
}

fn clamp_truncate(x: f64) -> f64 {
    x.clamp(DOMAIN_MIN, DOMAIN_MAX).trunc()
}

/// Draws `n` observations, each of the five fields independently from
/// `params`.
pub fn generate_cohort<R: Rng + ?Sized>(
    n: usize,
    params: &DistributionParams,
    rng: &mut R,
) -> Result<Cohort, CohortErr> {
    if n == 0 {
        return Err(GeneratorErr::ZeroSampleCount.into());
    }
    let sampler = Sampler::new(params)?;
    let observations = (0..n)
        .map(|_| Observation::from_values(std::array::from_fn(|_| sampler.draw(rng))))
        .collect();
    tracing::debug!(n, kind = %params.kind(), "generated cohort");
    Ok(Cohort::new(observations))
}

pub fn generate_cohorts_with_params<R: Rng + ?Sized>(
    n: usize,
    week_1: &DistributionParams,
    week_2: &DistributionParams,
    rng: &mut R,
) -> Result<CohortPair, CohortErr> {
    Ok(CohortPair {
        week_1: generate_cohort(n, week_1, rng)?,
        week_2: generate_cohort(n, week_2, rng)?,
    })
}

/// Generates both weeks for a named preset.
pub fn generate_cohorts<R: Rng + ?Sized>(
    n: usize,
    kind: DistributionKind,
    preset: CorrelationPreset,
    rng: &mut R,
) -> Result<CohortPair, CohortErr> {
    let (week_1, week_2) = preset_params(preset, kind);
    generate_cohorts_with_params(n, &week_1, &week_2, rng)
}
