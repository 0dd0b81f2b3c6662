use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use crate::error::CohortErr;
use crate::power::error::PowerErr;

/// Discrete distribution estimated from an observed integral sample.
#[derive(Debug, Clone)]
pub struct EmpiricalPmf {
    support: Vec<i64>,
    probabilities: Vec<f64>,
    index: WeightedIndex<f64>,
}

impl EmpiricalPmf {
    pub fn from_sample(
        values: &[f64],
        support_min: i64,
        support_max: i64,
        smoothing: bool,
    ) -> Result<Self, CohortErr> {
        if support_min > support_max {
            return Err(PowerErr::EmptySupport {
                min: support_min,
                max: support_max,
            }
            .into());
        }
        if values.is_empty() {
            return Err(PowerErr::EmptySample.into());
        }

        let support: Vec<i64> = (support_min..=support_max).collect();
        let pseudo_count = if smoothing { 1.0 } else { 0.0 };
        let mut counts = vec![pseudo_count; support.len()];
        for &value in values {
            if value.fract() != 0.0 {
                return Err(PowerErr::NonIntegralValue(value).into());
            }
            if value < support_min as f64 || value > support_max as f64 {
                return Err(PowerErr::OutsideSupport {
                    value,
                    min: support_min,
                    max: support_max,
                }
                .into());
            }
            counts[(value as i64 - support_min) as usize] += 1.0;
        }
        let total: f64 = counts.iter().sum();
        let probabilities: Vec<f64> = counts.iter().map(|c| c / total).collect();
        let index =
            WeightedIndex::new(&probabilities).map_err(|e| PowerErr::Weights(e.to_string()))?;

        Ok(Self {
            support,
            probabilities,
            index,
        })
    }

    pub fn support(&self) -> &[i64] {
        &self.support
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        (0..n)
            .map(|_| self.support[self.index.sample(rng)] as f64)
            .collect()
    }
}
