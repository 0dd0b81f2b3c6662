//----------------------------------------
// generator errors
//----------------------------------------
use crate::error::CohortErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorErr {
    #[error("unsupported distribution kind: {0}")]
    UnsupportedDistribution(String),
    #[error("unsupported correlation preset: {0}")]
    UnsupportedPreset(String),
    #[error("sample count should be positive")]
    ZeroSampleCount,
    #[error("invalid distribution parameters: {0}")]
    InvalidParameters(String),
}

impl From<GeneratorErr> for CohortErr {
    fn from(err: GeneratorErr) -> Self {
        CohortErr::Generator(err)
    }
}
