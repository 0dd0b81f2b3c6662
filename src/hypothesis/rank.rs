use itertools::Itertools;
use statrs::statistics::{Data, OrderStatistics, RankTieBreaker};

use crate::error::CohortErr;
use crate::hypothesis::error::HypothesisErr;

/// Ranks of a sample (1-based, ties get the average of the positions they
/// span) plus the size of every tie group.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub ranks: Vec<f64>,
    pub tie_sizes: Vec<usize>,
}

impl Ranking {
    pub fn has_ties(&self) -> bool {
        self.tie_sizes.iter().any(|&t| t > 1)
    }

    /// sum(t^3 - t) over tie groups
    pub fn tie_term(&self) -> f64 {
        self.tie_sizes
            .iter()
            .map(|&t| {
                let t = t as f64;
                t * t * t - t
            })
            .sum()
    }
}

/// Concatenates both samples, rejecting NaN and infinities.
pub fn pool(x: &[f64], y: &[f64]) -> Result<Vec<f64>, CohortErr> {
    let pooled: Vec<f64> = x.iter().chain(y.iter()).copied().collect();
    match pooled.iter().find(|v| !v.is_finite()) {
        Some(&v) => Err(HypothesisErr::NonFinite(v).into()),
        None => Ok(pooled),
    }
}

/// Values must be finite; see [`pool`].
pub fn rank_average(values: &[f64]) -> Ranking {
    let ranks = Data::new(values.to_vec()).ranks(RankTieBreaker::Average);
    let tie_sizes = values
        .iter()
        .sorted_by(|a, b| a.total_cmp(b))
        .dedup_with_count()
        .map(|(count, _)| count)
        .collect();
    Ranking { ranks, tie_sizes }
}

/// Middle value, or the mean of the two middle values for even lengths.
pub fn grand_median(values: &[f64]) -> f64 {
    Data::new(values.to_vec()).median()
}
