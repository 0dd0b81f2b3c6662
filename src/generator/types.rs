//----------------------------------------
// generator mod types
//----------------------------------------
use std::fmt;
use std::str::FromStr;

use crate::generator::error::GeneratorErr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionKind {
    Normal,
    Uniform,
    Poisson,
}

impl FromStr for DistributionKind {
    type Err = GeneratorErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(DistributionKind::Normal),
            "uniform" => Ok(DistributionKind::Uniform),
            "poisson" => Ok(DistributionKind::Poisson),
            other => Err(GeneratorErr::UnsupportedDistribution(other.to_string())),
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DistributionKind::Normal => "normal",
            DistributionKind::Uniform => "uniform",
            DistributionKind::Poisson => "poisson",
        };
        f.write_str(name)
    }
}

/// Parameters of one week's sampling distribution. Uniform bounds are
/// inclusive integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionParams {
    Normal { mean: f64, std_dev: f64 },
    Uniform { min: i64, max: i64 },
    Poisson { rate: f64 },
}

impl DistributionParams {
    pub fn kind(&self) -> DistributionKind {
        match self {
            DistributionParams::Normal { .. } => DistributionKind::Normal,
            DistributionParams::Uniform { .. } => DistributionKind::Uniform,
            DistributionParams::Poisson { .. } => DistributionKind::Poisson,
        }
    }
}

/// How week 2 is shifted relative to week 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationPreset {
    NoCorrelation,
    Positive,
    VeryPositive,
    Negative,
    VeryNegative,
}

impl CorrelationPreset {
    pub const ALL: [CorrelationPreset; 5] = [
        CorrelationPreset::NoCorrelation,
        CorrelationPreset::Positive,
        CorrelationPreset::VeryPositive,
        CorrelationPreset::Negative,
        CorrelationPreset::VeryNegative,
    ];

    /// File stem used when a preset is written to disk.
    pub fn file_stem(self) -> &'static str {
        match self {
            CorrelationPreset::NoCorrelation => "no_correlation",
            CorrelationPreset::Positive => "pos_correlation",
            CorrelationPreset::VeryPositive => "very_pos_correlation",
            CorrelationPreset::Negative => "neg_correlation",
            CorrelationPreset::VeryNegative => "very_neg_correlation",
        }
    }
}

impl FromStr for CorrelationPreset {
    type Err = GeneratorErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "none" => Ok(CorrelationPreset::NoCorrelation),
            "positive" => Ok(CorrelationPreset::Positive),
            "very-positive" => Ok(CorrelationPreset::VeryPositive),
            "negative" => Ok(CorrelationPreset::Negative),
            "very-negative" => Ok(CorrelationPreset::VeryNegative),
            _ => Err(GeneratorErr::UnsupportedPreset(s.to_string())),
        }
    }
}

impl fmt::Display for CorrelationPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CorrelationPreset::NoCorrelation => "none",
            CorrelationPreset::Positive => "positive",
            CorrelationPreset::VeryPositive => "very-positive",
            CorrelationPreset::Negative => "negative",
            CorrelationPreset::VeryNegative => "very-negative",
        };
        f.write_str(name)
    }
}
