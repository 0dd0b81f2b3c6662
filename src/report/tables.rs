use crate::hypothesis::types::{MannWhitneyResult, MedianTestResult};
use crate::observation::types::Variable;
use crate::power::types::PowerEstimate;
use crate::report::table::Table;

pub fn mann_whitney_table(results: &[(Variable, MannWhitneyResult)]) -> Table {
    let mut table = Table::new("Mann Whitney U Test Results", &["Question", "Statistic", "P-Value"]);
    for (variable, result) in results {
        table.push_row([
            variable.label().to_string(),
            result.statistic.to_string(),
            result.p_value.to_string(),
        ]);
    }
    table
}

pub fn median_test_table(results: &[(Variable, MedianTestResult)]) -> Table {
    let mut table = Table::new(
        "Median Test Results",
        &["Question", "Statistic", "P-Value", "Grand Median"],
    );
    for (variable, result) in results {
        table.push_row([
            variable.label().to_string(),
            result.statistic.to_string(),
            result.p_value.to_string(),
            result.grand_median.to_string(),
        ]);
    }
    table
}

pub fn power_table(results: &[(Variable, PowerEstimate)]) -> Table {
    let mut table = Table::new("Mann Whitney U Power Estimate", &["Question", "Beta", "Power"]);
    for (variable, estimate) in results {
        table.push_row([
            variable.label().to_string(),
            estimate.beta.to_string(),
            estimate.power.to_string(),
        ]);
    }
    table
}
