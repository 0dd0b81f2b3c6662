use std::str::FromStr;

use crate::hypothesis::error::HypothesisErr;

/// Alternative hypothesis, stated for the first sample (week 1) against the
/// second (week 2).
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone)]
pub enum HypothesisType {
    #[default]
    NotEqual,
    Greater,
    Less,
}

impl FromStr for HypothesisType {
    type Err = HypothesisErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-sided" | "not-equal" => Ok(HypothesisType::NotEqual),
            "greater" => Ok(HypothesisType::Greater),
            "less" => Ok(HypothesisType::Less),
            other => Err(HypothesisErr::UnsupportedAlternative(other.to_string())),
        }
    }
}
