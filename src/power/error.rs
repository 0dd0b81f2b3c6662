//----------------------------------------
// power errors
//----------------------------------------
use crate::error::CohortErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowerErr {
    #[error("significance level should be in (0, 1); got {0}")]
    BadAlpha(f64),
    #[error("number of trials should be positive")]
    ZeroTrials,
    #[error("synthetic sample of size {synthetic_size} cannot be subsampled to {sample_size}")]
    SyntheticTooSmall {
        synthetic_size: usize,
        sample_size: usize,
    },
    #[error("observed sample is empty")]
    EmptySample,
    #[error("support [{min}, {max}] is empty")]
    EmptySupport { min: i64, max: i64 },
    #[error("value {value} is outside support [{min}, {max}]")]
    OutsideSupport { value: f64, min: i64, max: i64 },
    #[error("value {0} is not integral")]
    NonIntegralValue(f64),
    #[error("invalid probability weights: {0}")]
    Weights(String),
}

impl From<PowerErr> for CohortErr {
    fn from(err: PowerErr) -> Self {
        CohortErr::Power(err)
    }
}
