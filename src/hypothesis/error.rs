//----------------------------------------
// hypothesis errors
//----------------------------------------
use crate::error::CohortErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HypothesisErr {
    #[error("{0} sample is empty")]
    EmptySample(&'static str),
    #[error("{0} cohort has no observations")]
    EmptyCohort(&'static str),
    #[error("exact test requested but samples contain ties")]
    ExactWithTies,
    #[error("all values are on one side of the grand median ({0}); median test is undefined")]
    DegenerateTable(f64),
    #[error("sample contains a non-finite value ({0})")]
    NonFinite(f64),
    #[error("unsupported alternative hypothesis: {0}")]
    UnsupportedAlternative(String),
    #[error("could not construct reference distribution: {0}")]
    Distribution(String),
}

impl From<HypothesisErr> for CohortErr {
    fn from(err: HypothesisErr) -> Self {
        CohortErr::Hypothesis(err)
    }
}
