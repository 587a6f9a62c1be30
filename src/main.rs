//! Insurance Estimator CLI
//!
//! Command-line interface for training the cost model and running the
//! estimation and rule engines against it.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use insurance_estimator::model::{self, TrainConfig};
use insurance_estimator::profile::{loader, synthetic, Observation};
use insurance_estimator::rules::{
    calculate_deductions, compare_coverage, match_schemes, AccidentClaim, AccidentType, RiskLevel,
    Severity, TaxInput,
};

#[derive(Parser)]
#[command(name = "insurance_estimator", version, about = "Medical insurance cost estimation engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a synthetic dataset CSV
    Generate {
        /// Number of rows to generate
        #[arg(long, default_value_t = synthetic::DEFAULT_SAMPLES)]
        samples: usize,

        /// Generator seed
        #[arg(long, default_value_t = synthetic::DEFAULT_SEED)]
        seed: u64,

        /// Output path
        #[arg(long, default_value = loader::DEFAULT_DATASET_PATH)]
        out: String,
    },

    /// Train the model from a dataset CSV and persist the bundle
    Train {
        #[command(flatten)]
        paths: PathArgs,

        /// Skip the boosted candidate (selection degrades to bagged trees)
        #[arg(long)]
        no_boosted: bool,
    },

    /// Predict the annual cost for one profile and derive the benefit views
    Predict {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Estimate accident/injury costs with a line-item breakdown
    Accident {
        /// Accident type (car accident, fall, sports injury, workplace injury, other)
        #[arg(long = "type")]
        accident_type: String,

        /// Severity (minor, moderate, severe, critical)
        #[arg(long)]
        severity: String,

        #[arg(long)]
        hospitalized: bool,

        #[arg(long)]
        surgery: bool,

        /// Recovery period in days (1-365)
        #[arg(long, default_value_t = 7)]
        recovery_days: u32,
    },

    /// Calculate health-insurance tax deductions
    Tax {
        #[arg(long, default_value_t = 25000.0)]
        self_premium: f64,

        #[arg(long)]
        self_senior: bool,

        #[arg(long, default_value_t = 0.0)]
        parents_premium: f64,

        #[arg(long)]
        parents_senior: bool,

        #[arg(long, default_value_t = 0.0)]
        checkup_cost: f64,
    },
}

#[derive(Args)]
struct PathArgs {
    /// Dataset CSV path
    #[arg(long, default_value = loader::DEFAULT_DATASET_PATH)]
    data: String,

    /// Model artifact path
    #[arg(long, default_value = model::DEFAULT_MODEL_PATH)]
    model: String,
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long)]
    age: u32,

    /// male or female
    #[arg(long)]
    sex: String,

    #[arg(long)]
    bmi: f64,

    #[arg(long, default_value_t = 0)]
    children: u32,

    /// yes or no
    #[arg(long, default_value = "no")]
    smoker: String,

    /// northeast, northwest, southeast, or southwest
    #[arg(long)]
    region: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { samples, seed, out } => {
            let rows = synthetic::generate_dataset(samples, seed);
            loader::write_dataset(&out, &rows)
                .with_context(|| format!("writing dataset to {out}"))?;
            println!("Wrote {} rows to {}", rows.len(), out);
        }

        Command::Train { paths, no_boosted } => {
            let rows = loader::load_dataset(&paths.data)
                .with_context(|| format!("loading dataset from {}", paths.data))?;
            println!("Loaded {} rows from {}", rows.len(), paths.data);

            let config = TrainConfig {
                enable_boosted: !no_boosted,
                ..TrainConfig::default()
            };
            let bundle = model::train(&rows, &config).context("training failed")?;
            model::save_bundle(&bundle, &paths.model)
                .with_context(|| format!("saving model to {}", paths.model))?;

            println!("\nModel Training Complete");
            println!("  Model Type:       {}", bundle.model_kind().as_str());
            println!("  Training R²:      {:.4}", bundle.train_score);
            println!("  Testing R²:       {:.4}", bundle.test_score);
            println!("  Bagged R²:        {:.4}", bundle.candidate_scores.bagged);
            match bundle.candidate_scores.boosted {
                Some(score) => println!("  Boosted R²:       {:.4}", score),
                None => println!("  Boosted R²:       unavailable"),
            }
            println!("  Saved to:         {}", paths.model);
        }

        Command::Predict { profile, paths } => {
            let bundle = model::load_or_train(&paths.model, &paths.data, &TrainConfig::default())?;

            let observation = Observation::new(
                profile.age,
                profile.sex,
                profile.bmi,
                profile.children,
                profile.smoker,
                profile.region,
            );
            let cost = bundle.predict(&observation)?;
            let risk = RiskLevel::from_cost(cost);

            println!("Predicted Annual Cost: ₹{cost:.2}");
            println!("Monthly Premium (Est.): ₹{:.2}", cost / 12.0);
            println!("Risk Level: {}", risk.as_str());

            let comparison = compare_coverage(cost);
            println!("\nGovernment vs Private Coverage");
            println!("{:<28} {:>14}", "Item", "Amount");
            println!("{}", "-".repeat(44));
            println!("{:<28} {:>14.2}", "Government coverage", comparison.govt_coverage);
            println!("{:<28} {:>14.2}", "Out-of-pocket", comparison.govt_out_of_pocket);
            println!("{:<28} {:>14.2}", "Private (base plan)", comparison.private_base);
            println!("{:<28} {:>14.2}", "Private (premium plan)", comparison.private_premium);

            let recommendations = match_schemes(&observation, cost);
            println!("\nEligible Schemes ({}):", recommendations.len());
            for rec in &recommendations {
                println!("  [{}] {}", rec.priority.as_str(), rec.name);
                println!("       {}", rec.eligibility);
            }
        }

        Command::Accident {
            accident_type,
            severity,
            hospitalized,
            surgery,
            recovery_days,
        } => {
            let claim = AccidentClaim {
                accident_type: AccidentType::parse(&accident_type),
                severity: Severity::parse(&severity),
                hospitalized,
                surgery,
                recovery_days,
            };

            let breakdown = claim.breakdown();
            println!(
                "Accident Estimate: {} / {}",
                claim.accident_type.as_str(),
                claim.severity.as_str()
            );
            println!("{:<24} {:>14}", "Component", "Amount");
            println!("{}", "-".repeat(40));
            for item in breakdown.items() {
                println!("{:<24} {:>14.2}", item.label, item.amount);
            }
            println!("{}", "-".repeat(40));
            println!("{:<24} {:>14.2}", "Total", breakdown.total());
        }

        Command::Tax {
            self_premium,
            self_senior,
            parents_premium,
            parents_senior,
            checkup_cost,
        } => {
            let result = calculate_deductions(&TaxInput {
                self_premium,
                self_is_senior: self_senior,
                parents_premium,
                parents_is_senior: parents_senior,
                checkup_cost,
            });

            println!("Tax Deductions");
            println!("  Self:            ₹{:.2}", result.self_deduction);
            println!("  Parents:         ₹{:.2}", result.parents_deduction);
            println!("  Checkup (info):  ₹{:.2}", result.checkup_deduction);
            println!("  Total:           ₹{:.2}", result.total_deduction);
            println!("\nTax Saved by Slab");
            for rate in [0.30, 0.20, 0.10] {
                println!("  {:.0}% slab:        ₹{:.2}", rate * 100.0, result.savings_at(rate));
            }
        }
    }

    Ok(())
}
