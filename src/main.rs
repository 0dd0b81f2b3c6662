// Cohort comparison CLI
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use cohortcompute::compute::{
    CohortPaths, CorrelationPreset, DistributionKind, HypothesisType, MannWhitneySettings,
    MedianTestSettings, PowerSettings, Variable, compare_mann_whitney, compare_median,
    estimate_power, generate_cohorts, load_cohort_pair, mann_whitney_table, median_test_table,
    power_table, write_cohort_pair,
};
use cohortcompute::logging::init_tracing;

#[derive(Parser)]
#[command(name = "cohortcompute")]
#[command(version)]
#[command(about = "Generate two-week survey cohorts and test whether the weeks differ", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic week 1 / week 2 cohorts
    Generate {
        /// Observations per week
        #[arg(short = 'n', long, default_value = "30")]
        samples: usize,

        /// Sampling distribution (normal, uniform or poisson)
        #[arg(short, long, default_value = "normal")]
        distribution: DistributionKind,

        /// Correlation preset (none, positive, very-positive, negative, very-negative)
        #[arg(short, long, default_value = "none")]
        preset: CorrelationPreset,

        /// Directory for the two cohort files
        #[arg(short, long, value_name = "DIR")]
        out_dir: PathBuf,

        /// File stem (defaults to the preset's stem, e.g. no_correlation)
        #[arg(long)]
        stem: Option<String>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compare two cohort files
    Analyze {
        /// Week 1 cohort file
        #[arg(long, value_name = "WEEK_1")]
        week_1: PathBuf,

        /// Week 2 cohort file
        #[arg(long, value_name = "WEEK_2")]
        week_2: PathBuf,

        /// Alternative hypothesis (two-sided, greater, less)
        #[arg(long, default_value = "two-sided")]
        alternative: HypothesisType,

        /// Also run the median test
        #[arg(long)]
        median: bool,

        /// Also estimate Mann-Whitney power by Monte Carlo
        #[arg(long)]
        power: bool,

        /// Significance level for the power estimate
        #[arg(long, default_value = "0.05")]
        alpha: f64,

        /// Monte Carlo trials
        #[arg(long, default_value = "1000")]
        trials: usize,

        /// Size of the synthetic sample drawn per week
        #[arg(long, default_value = "1000")]
        synthetic_size: usize,

        /// Disable Laplace smoothing of the empirical distribution
        #[arg(long)]
        no_smoothing: bool,

        /// Random seed for the power estimate
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate every preset for a distribution and test each
    Sweep {
        /// Observations per week
        #[arg(short = 'n', long, default_value = "30")]
        samples: usize,

        /// Sampling distribution (normal, uniform or poisson)
        #[arg(short, long, default_value = "normal")]
        distribution: DistributionKind,

        /// Directory for the cohort files
        #[arg(short, long, value_name = "DIR")]
        out_dir: PathBuf,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn generate(
    samples: usize,
    distribution: DistributionKind,
    preset: CorrelationPreset,
    paths: &CohortPaths,
    rng: &mut StdRng,
) -> Result<()> {
    let pair = generate_cohorts(samples, distribution, preset, rng)?;
    write_cohort_pair(paths, &pair)?;
    tracing::info!(
        %distribution,
        %preset,
        week_1 = %paths.week_1.display(),
        week_2 = %paths.week_2.display(),
        "wrote cohorts"
    );
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            samples,
            distribution,
            preset,
            out_dir,
            stem,
            seed,
        } => {
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;
            let stem = stem.unwrap_or_else(|| preset.file_stem().to_string());
            let paths = CohortPaths::in_dir(&out_dir, &stem);
            generate(samples, distribution, preset, &paths, &mut rng_from(seed))?;
        }

        Commands::Analyze {
            week_1,
            week_2,
            alternative,
            median,
            power,
            alpha,
            trials,
            synthetic_size,
            no_smoothing,
            seed,
        } => {
            let pair = load_cohort_pair(&CohortPaths::new(week_1, week_2))?;
            let mann_whitney = MannWhitneySettings {
                alternative,
                ..Default::default()
            };

            let results =
                compare_mann_whitney(&pair.week_1, &pair.week_2, &Variable::ALL, &mann_whitney)?;
            mann_whitney_table(&results).print();

            if median {
                let results = compare_median(
                    &pair.week_1,
                    &pair.week_2,
                    &Variable::ALL,
                    &MedianTestSettings::default(),
                )?;
                median_test_table(&results).print();
            }

            if power {
                let settings = PowerSettings {
                    seed,
                    alpha,
                    trials,
                    synthetic_size,
                    smoothing: !no_smoothing,
                    mann_whitney,
                    ..Default::default()
                };
                let estimates = estimate_power(&pair.week_1, &pair.week_2, &settings)?;
                power_table(&estimates).print();
            }
        }

        Commands::Sweep {
            samples,
            distribution,
            out_dir,
            seed,
        } => {
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;
            let mut rng = rng_from(seed);
            for preset in CorrelationPreset::ALL {
                let paths = CohortPaths::in_dir(&out_dir, preset.file_stem());
                generate(samples, distribution, preset, &paths, &mut rng)?;
                let pair = load_cohort_pair(&paths)?;
                let results = compare_mann_whitney(
                    &pair.week_1,
                    &pair.week_2,
                    &Variable::ALL,
                    &MannWhitneySettings::default(),
                )?;
                println!("{preset}");
                mann_whitney_table(&results).print();
            }
        }
    }

    Ok(())
}
