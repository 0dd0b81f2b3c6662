//----------------------------------------
// observation mod types
//----------------------------------------
use serde::Serialize;

/// Smallest value any survey field may take.
pub const DOMAIN_MIN: f64 = 0.0;
/// Largest value any survey field may take.
pub const DOMAIN_MAX: f64 = 5.0;

/// The five survey questions, in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    NumHelped,
    CrowdSize,
    SessionsCompleted,
    Difficulty,
    Comfort,
}

impl Variable {
    /// Canonical order, shared by the writer, the loader and every report.
    pub const ALL: [Variable; 5] = [
        Variable::NumHelped,
        Variable::CrowdSize,
        Variable::SessionsCompleted,
        Variable::Difficulty,
        Variable::Comfort,
    ];

    pub fn index(self) -> usize {
        match self {
            Variable::NumHelped => 0,
            Variable::CrowdSize => 1,
            Variable::SessionsCompleted => 2,
            Variable::Difficulty => 3,
            Variable::Comfort => 4,
        }
    }

    /// Header name used in cohort files.
    pub fn column_name(self) -> &'static str {
        match self {
            Variable::NumHelped => "numHelped",
            Variable::CrowdSize => "crowdSize",
            Variable::SessionsCompleted => "sessionsCompleted",
            Variable::Difficulty => "difficulty",
            Variable::Comfort => "comfort",
        }
    }

    /// Row label used in report tables.
    pub fn label(self) -> &'static str {
        match self {
            Variable::NumHelped => "Number Helped",
            Variable::CrowdSize => "Crowd Size",
            Variable::SessionsCompleted => "Completed",
            Variable::Difficulty => "Difficulty",
            Variable::Comfort => "Comfort",
        }
    }
}

/// One respondent's answers. Field order matches [`Variable::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub num_helped: f64,
    pub crowd_size: f64,
    pub sessions_completed: f64,
    pub difficulty: f64,
    pub comfort: f64,
}

impl Observation {
    pub fn from_values(values: [f64; 5]) -> Self {
        let [num_helped, crowd_size, sessions_completed, difficulty, comfort] = values;
        Self {
            num_helped,
            crowd_size,
            sessions_completed,
            difficulty,
            comfort,
        }
    }

    pub fn values(&self) -> [f64; 5] {
        [
            self.num_helped,
            self.crowd_size,
            self.sessions_completed,
            self.difficulty,
            self.comfort,
        ]
    }

    pub fn get(&self, variable: Variable) -> f64 {
        self.values()[variable.index()]
    }

    pub fn is_in_domain(&self) -> bool {
        self.values()
            .iter()
            .all(|v| (DOMAIN_MIN..=DOMAIN_MAX).contains(v))
    }
}

/// Observations from one measurement week, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cohort {
    observations: Vec<Observation>,
}

impl Cohort {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// All values of one variable, in observation order.
    pub fn column(&self, variable: Variable) -> Vec<f64> {
        self.observations.iter().map(|o| o.get(variable)).collect()
    }
}

/// The two weeks being compared.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortPair {
    pub week_1: Cohort,
    pub week_2: Cohort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_follows_canonical_index() {
        let cohort = Cohort::new(vec![
            Observation::from_values([0., 1., 2., 3., 4.]),
            Observation::from_values([5., 4., 3., 2., 1.]),
        ]);
        assert_eq!(cohort.column(Variable::NumHelped), vec![0., 5.]);
        assert_eq!(cohort.column(Variable::SessionsCompleted), vec![2., 3.]);
        assert_eq!(cohort.column(Variable::Comfort), vec![4., 1.]);
    }

    #[test]
    fn canonical_order_matches_index() {
        for (i, variable) in Variable::ALL.iter().enumerate() {
            assert_eq!(variable.index(), i);
        }
    }

    #[test]
    fn domain_check() {
        assert!(Observation::from_values([0., 5., 2.5, 1., 3.]).is_in_domain());
        assert!(!Observation::from_values([0., 5.5, 2., 1., 3.]).is_in_domain());
        assert!(!Observation::from_values([-1., 5., 2., 1., 3.]).is_in_domain());
    }
}
