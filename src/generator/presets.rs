use crate::generator::types::{CorrelationPreset, DistributionKind, DistributionParams};

// Week centres used by every preset: 2.5 is the middle of the scale, 1 and 4
// sit near either end.
const MID: (f64, f64) = (2.5, 0.833);
const LOW: (f64, f64) = (1.0, 0.333);
const HIGH: (f64, f64) = (4.0, 0.333);

#[derive(Clone, Copy)]
enum Centre {
    Mid,
    Low,
    High,
}

fn params_for(centre: Centre, kind: DistributionKind) -> DistributionParams {
    let (mean, std_dev) = match centre {
        Centre::Mid => MID,
        Centre::Low => LOW,
        Centre::High => HIGH,
    };
    match kind {
        DistributionKind::Normal => DistributionParams::Normal { mean, std_dev },
        DistributionKind::Uniform => match centre {
            Centre::Mid => DistributionParams::Uniform { min: 0, max: 5 },
            Centre::Low => DistributionParams::Uniform { min: 0, max: 2 },
            Centre::High => DistributionParams::Uniform { min: 3, max: 5 },
        },
        DistributionKind::Poisson => DistributionParams::Poisson { rate: mean },
    }
}

/// Week 1 and week 2 parameters for a preset. The same parameters are used
/// for all five variables of a week.
pub fn preset_params(
    preset: CorrelationPreset,
    kind: DistributionKind,
) -> (DistributionParams, DistributionParams) {
    let (week_1, week_2) = match preset {
        CorrelationPreset::NoCorrelation => (Centre::Mid, Centre::Mid),
        CorrelationPreset::Positive => (Centre::Mid, Centre::High),
        CorrelationPreset::VeryPositive => (Centre::Low, Centre::High),
        CorrelationPreset::Negative => (Centre::Low, Centre::Mid),
        CorrelationPreset::VeryNegative => (Centre::High, Centre::Low),
    };
    (params_for(week_1, kind), params_for(week_2, kind))
}
