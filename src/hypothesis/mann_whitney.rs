use crate::error::CohortErr;
use crate::hypothesis::error::HypothesisErr;
use crate::hypothesis::rank::{pool, rank_average};
use crate::hypothesis::std_normal::std_normal_sf;
use crate::hypothesis::types::{MannWhitneyMethod, MannWhitneyResult, MannWhitneySettings};
use crate::hypothesis_type::HypothesisType;

const EXACT_MAX_SAMPLE: usize = 8;

/// Two-sample Mann-Whitney U test of `x` against `y`.
///
/// The reported statistic is U of `x`, so swapping the samples gives
/// `m * n - U`. Ranks are averaged over ties; the normal approximation uses
/// the tie-corrected variance.
pub fn mann_whitney_u(
    x: &[f64],
    y: &[f64],
    settings: &MannWhitneySettings,
) -> Result<MannWhitneyResult, CohortErr> {
    if x.is_empty() {
        return Err(HypothesisErr::EmptySample("first").into());
    }
    if y.is_empty() {
        return Err(HypothesisErr::EmptySample("second").into());
    }
    let (m, n) = (x.len(), y.len());
    let pooled = pool(x, y)?;
    let ranking = rank_average(&pooled);

    #[allow(non_snake_case)]
    let R1: f64 = ranking.ranks[..m].iter().sum();
    let mf = m as f64;
    let nf = n as f64;
    let u1 = R1 - mf * (mf + 1.) / 2.;
    let u2 = mf * nf - u1;

    let method = match settings.method {
        MannWhitneyMethod::Auto => {
            if m <= EXACT_MAX_SAMPLE && n <= EXACT_MAX_SAMPLE && !ranking.has_ties() {
                MannWhitneyMethod::Exact
            } else {
                MannWhitneyMethod::Asymptotic
            }
        }
        MannWhitneyMethod::Exact if ranking.has_ties() => {
            return Err(HypothesisErr::ExactWithTies.into());
        }
        other => other,
    };

    // Upper-tail statistic for the requested alternative
    let u = match settings.alternative {
        HypothesisType::NotEqual => u1.max(u2),
        HypothesisType::Greater => u1,
        HypothesisType::Less => u2,
    };

    let one_sided = match method {
        MannWhitneyMethod::Exact => exact_u_sf(u, m, n),
        _ => {
            let big_n = mf + nf;
            let variance =
                mf * nf / 12. * ((big_n + 1.) - ranking.tie_term() / (big_n * (big_n - 1.)));
            if variance <= 0.0 {
                // every value tied
                1.0
            } else {
                let continuity = if settings.use_continuity { 0.5 } else { 0.0 };
                let z = (u - mf * nf / 2. - continuity) / variance.sqrt();
                std_normal_sf(z)
            }
        }
    };
    let p_value = match settings.alternative {
        HypothesisType::NotEqual => 2. * one_sided,
        _ => one_sided,
    }
    .clamp(0.0, 1.0);

    Ok(MannWhitneyResult {
        statistic: u1,
        p_value,
        method,
        m,
        n,
    })
}

/// P(U >= u) under the null for samples of size m and n without ties.
///
/// Counts arrangements with the recurrence f(i, j, k) = f(i-1, j, k-j) +
/// f(i, j-1, k): the largest pooled value either comes from the first sample
/// (beating all j values of the second) or from the second.
fn exact_u_sf(u: f64, m: usize, n: usize) -> f64 {
    let mut prev: Vec<Vec<f64>> = vec![vec![1.0]; n + 1];
    for i in 1..=m {
        let mut cur: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
        cur.push(vec![1.0]);
        for j in 1..=n {
            let mut counts = vec![0.0; i * j + 1];
            for (k, c) in prev[j].iter().enumerate() {
                counts[k + j] += c;
            }
            for (k, c) in cur[j - 1].iter().enumerate() {
                counts[k] += c;
            }
            cur.push(counts);
        }
        prev = cur;
    }
    let counts = &prev[n];
    let total: f64 = counts.iter().sum();
    let threshold = u.ceil().max(0.0) as usize;
    counts.iter().skip(threshold).sum::<f64>() / total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sided() -> MannWhitneySettings {
        MannWhitneySettings::default()
    }

    #[test]
    fn exact_small_separated() {
        let res = mann_whitney_u(&[1., 2., 3.], &[4., 5., 6.], &two_sided()).unwrap();
        assert_eq!(res.statistic, 0.0);
        assert_eq!(res.method, MannWhitneyMethod::Exact);
        assert!((res.p_value - 0.1).abs() < 1e-12);
    }

    #[test]
    fn exact_distribution_sums_to_one() {
        assert!((exact_u_sf(0.0, 4, 5) - 1.0).abs() < 1e-12);
        assert_eq!(exact_u_sf(21.0, 4, 5), 0.0);
        // one of C(5, 2) = 10 arrangements reaches the maximum U = 6
        assert!((exact_u_sf(6.0, 2, 3) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn asymptotic_separated() {
        let x: Vec<f64> = (1..=10).map(f64::from).collect();
        let y: Vec<f64> = (11..=20).map(f64::from).collect();
        let res = mann_whitney_u(&x, &y, &two_sided()).unwrap();
        assert_eq!(res.method, MannWhitneyMethod::Asymptotic);
        assert_eq!(res.statistic, 0.0);
        assert!((res.p_value - 0.000182671791).abs() < 1e-9);
    }

    #[test]
    fn asymptotic_with_ties() {
        let x = [1., 2., 2., 3., 3., 4., 5., 5., 1., 2.];
        let y = [3., 4., 4., 5., 5., 2., 3., 4., 5., 5.];
        let res = mann_whitney_u(&x, &y, &two_sided()).unwrap();
        assert_eq!(res.statistic, 26.0);
        assert!((res.p_value - 0.068421412).abs() < 1e-7);
    }

    #[test]
    fn swapping_samples_mirrors_u() {
        let x = [1., 2., 2., 3., 3., 4., 5., 5., 1., 2.];
        let y = [3., 4., 4., 5., 5., 2., 3., 4., 5., 5., 0.];
        let ab = mann_whitney_u(&x, &y, &two_sided()).unwrap();
        let ba = mann_whitney_u(&y, &x, &two_sided()).unwrap();
        assert_eq!(ab.statistic + ba.statistic, (x.len() * y.len()) as f64);
        assert_eq!(ab.u_min(), ba.u_min());
        assert!((ab.p_value - ba.p_value).abs() < 1e-12);
    }

    #[test]
    fn one_sided_alternatives() {
        let x = [1., 2., 3.];
        let y = [4., 5., 6.];
        let less = MannWhitneySettings {
            alternative: HypothesisType::Less,
            ..Default::default()
        };
        let greater = MannWhitneySettings {
            alternative: HypothesisType::Greater,
            ..Default::default()
        };
        let p_less = mann_whitney_u(&x, &y, &less).unwrap().p_value;
        let p_greater = mann_whitney_u(&x, &y, &greater).unwrap().p_value;
        assert!((p_less - 0.05).abs() < 1e-12);
        assert!((p_greater - 1.0).abs() < 1e-12);
    }

    #[test]
    fn identical_values_not_significant() {
        let res = mann_whitney_u(&[3.; 12], &[3.; 9], &two_sided()).unwrap();
        assert_eq!(res.p_value, 1.0);
    }

    #[test]
    fn exact_with_ties_error() {
        let settings = MannWhitneySettings {
            method: MannWhitneyMethod::Exact,
            ..Default::default()
        };
        let res = mann_whitney_u(&[1., 2., 2.], &[2., 3.], &settings);
        assert!(matches!(res, Err(CohortErr::Hypothesis(HypothesisErr::ExactWithTies))));
    }

    #[test]
    fn empty_sample_error() {
        if let Err(e) = mann_whitney_u(&[], &[1.0], &two_sided()) {
            assert_eq!(
                String::from("while running hypothesis test: first sample is empty"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
