//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::generator::generate::{
    generate_cohort, generate_cohorts, generate_cohorts_with_params,
};
pub use crate::generator::presets::preset_params;
pub use crate::generator::types::{CorrelationPreset, DistributionKind, DistributionParams};
pub use crate::hypothesis::compare::{compare_mann_whitney, compare_median};
pub use crate::hypothesis::mann_whitney::mann_whitney_u;
pub use crate::hypothesis::median_test::median_test;
pub use crate::hypothesis::types::{
    MannWhitneyMethod, MannWhitneyResult, MannWhitneySettings, MedianTestResult,
    MedianTestSettings,
};
pub use crate::hypothesis_type::HypothesisType;
pub use crate::observation::types::{
    Cohort, CohortPair, DOMAIN_MAX, DOMAIN_MIN, Observation, Variable,
};
pub use crate::power::estimate::{estimate_power, estimate_power_for_samples};
pub use crate::power::pmf::EmpiricalPmf;
pub use crate::power::types::{PowerEstimate, PowerSettings};
pub use crate::report::table::Table;
pub use crate::report::tables::{mann_whitney_table, median_test_table, power_table};
pub use crate::storage::csv_io::{load_cohort, load_cohort_pair, write_cohort, write_cohort_pair};
pub use crate::storage::paths::CohortPaths;
