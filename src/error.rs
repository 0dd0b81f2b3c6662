//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::generator::error::GeneratorErr;
pub use crate::hypothesis::error::HypothesisErr;
pub use crate::power::error::PowerErr;
pub use crate::storage::error::StorageErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CohortErr {
    #[error("while generating cohorts: {0}")]
    Generator(GeneratorErr),
    #[error("while reading or writing cohort: {0}")]
    Storage(StorageErr),
    #[error("while running hypothesis test: {0}")]
    Hypothesis(HypothesisErr),
    #[error("while estimating power: {0}")]
    Power(PowerErr),
}
