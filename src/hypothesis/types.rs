//----------------------------------------
// hypothesis mod types
//----------------------------------------
use crate::hypothesis_type::HypothesisType;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MannWhitneyMethod {
    /// Exact when both samples have at most 8 values and nothing is tied.
    #[default]
    Auto,
    Exact,
    Asymptotic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MannWhitneySettings {
    pub alternative: HypothesisType,
    pub use_continuity: bool,
    pub method: MannWhitneyMethod,
}

impl Default for MannWhitneySettings {
    fn default() -> Self {
        Self {
            alternative: HypothesisType::NotEqual,
            use_continuity: true,
            method: MannWhitneyMethod::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MannWhitneyResult {
    /// U of the first sample.
    pub statistic: f64,
    pub p_value: f64,
    /// Method actually used once `Auto` is resolved.
    pub method: MannWhitneyMethod,
    pub m: usize,
    pub n: usize,
}

impl MannWhitneyResult {
    /// min(U1, m*n - U1)
    pub fn u_min(&self) -> f64 {
        let mn = (self.m * self.n) as f64;
        self.statistic.min(mn - self.statistic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianTestSettings {
    /// Yates continuity correction on the 2x2 table.
    pub correction: bool,
}

impl Default for MedianTestSettings {
    fn default() -> Self {
        Self { correction: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianTestResult {
    pub statistic: f64,
    pub p_value: f64,
    pub grand_median: f64,
    /// Rows: above the median, at or below it. Columns: first, second sample.
    pub table: [[usize; 2]; 2],
}
