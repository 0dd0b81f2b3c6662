//! Per-variable tests across the two weeks. Results always come back in
//! canonical variable order, whatever order the caller nominates them in.

use crate::error::CohortErr;
use crate::hypothesis::error::HypothesisErr;
use crate::hypothesis::mann_whitney::mann_whitney_u;
use crate::hypothesis::median_test::median_test;
use crate::hypothesis::types::{
    MannWhitneyResult, MannWhitneySettings, MedianTestResult, MedianTestSettings,
};
use crate::observation::types::{Cohort, Variable};

pub(crate) fn check_cohorts(week_1: &Cohort, week_2: &Cohort) -> Result<(), CohortErr> {
    if week_1.is_empty() {
        return Err(HypothesisErr::EmptyCohort("week 1").into());
    }
    if week_2.is_empty() {
        return Err(HypothesisErr::EmptyCohort("week 2").into());
    }
    Ok(())
}

fn compare_with<T, F>(
    week_1: &Cohort,
    week_2: &Cohort,
    variables: &[Variable],
    test: F,
) -> Result<Vec<(Variable, T)>, CohortErr>
where
    F: Fn(&[f64], &[f64]) -> Result<T, CohortErr>,
{
    check_cohorts(week_1, week_2)?;
    Variable::ALL
        .iter()
        .filter(|v| variables.contains(*v))
        .map(|&v| -> Result<(Variable, T), CohortErr> {
            let result = test(&week_1.column(v), &week_2.column(v))?;
            tracing::debug!(variable = v.column_name(), "compared weeks");
            Ok((v, result))
        })
        .collect()
}

pub fn compare_mann_whitney(
    week_1: &Cohort,
    week_2: &Cohort,
    variables: &[Variable],
    settings: &MannWhitneySettings,
) -> Result<Vec<(Variable, MannWhitneyResult)>, CohortErr> {
    compare_with(week_1, week_2, variables, |x, y| {
        mann_whitney_u(x, y, settings)
    })
}

pub fn compare_median(
    week_1: &Cohort,
    week_2: &Cohort,
    variables: &[Variable],
    settings: &MedianTestSettings,
) -> Result<Vec<(Variable, MedianTestResult)>, CohortErr> {
    compare_with(week_1, week_2, variables, |x, y| median_test(x, y, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::types::Observation;

    fn cohort(rows: &[[f64; 5]]) -> Cohort {
        Cohort::new(rows.iter().copied().map(Observation::from_values).collect())
    }

    #[test]
    fn canonical_order_regardless_of_request() {
        let a = cohort(&[[1., 2., 3., 4., 5.], [0., 1., 2., 3., 4.], [1., 1., 1., 1., 1.]]);
        let b = cohort(&[[5., 4., 3., 2., 1.], [4., 4., 4., 4., 4.]]);
        let res = compare_mann_whitney(
            &a,
            &b,
            &[Variable::Comfort, Variable::NumHelped],
            &MannWhitneySettings::default(),
        )
        .unwrap();
        let order: Vec<Variable> = res.iter().map(|(v, _)| *v).collect();
        assert_eq!(order, vec![Variable::NumHelped, Variable::Comfort]);
    }

    #[test]
    fn repeated_comparison_is_identical() {
        let a = cohort(&[[1., 2., 3., 4., 5.], [0., 1., 2., 3., 4.], [2., 2., 1., 0., 1.]]);
        let b = cohort(&[[5., 4., 3., 2., 1.], [4., 4., 4., 4., 4.], [3., 3., 3., 5., 0.]]);
        let first = compare_mann_whitney(&a, &b, &Variable::ALL, &MannWhitneySettings::default())
            .unwrap();
        let second = compare_mann_whitney(&a, &b, &Variable::ALL, &MannWhitneySettings::default())
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn empty_cohort_error() {
        let a = cohort(&[[1., 2., 3., 4., 5.]]);
        if let Err(e) = compare_median(
            &a,
            &Cohort::default(),
            &Variable::ALL,
            &MedianTestSettings::default(),
        ) {
            assert_eq!(
                String::from("while running hypothesis test: week 2 cohort has no observations"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
