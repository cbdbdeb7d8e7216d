#![deny(unused_variables)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(clippy::no_effect_underscore_binding)]

use clap::{Args, CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use fraudscope::dashboard::accounts::RISK_FACTOR_HEADING;
use fraudscope::dashboard::{
    AccountId, AnalystConfig, DashboardRequest, DashboardView, EvaluationReport, MatrixPanel,
    SweepRow, build_view,
};
use fraudscope::dataset::{DEFAULT_DATASET_PATH, load_scored_records};
use fraudscope::session::{SLIDER_MAX, SLIDER_MIN, ThresholdSetting, sweep};
use fraudscope::tier::TRADEOFF_GUIDANCE;

#[derive(Args)]
pub struct DashboardArgs {
    /// Analyst profile (.toml) providing defaults for the flags below
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Scored dataset with FLAG and fraud_prob columns
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Fraud risk threshold, 0.10 to 0.90 in steps of 0.05
    #[arg(long, value_name = "T")]
    pub threshold: Option<f64>,

    /// Account to explore (Account_101, Account_205, Account_309)
    #[arg(long, value_name = "ID")]
    pub account: Option<String>,

    /// Also write the rendered state as a TOML report
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Args)]
pub struct SweepArgs {
    /// Scored dataset with FLAG and fraud_prob columns
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DATASET_PATH)]
    pub dataset: PathBuf,

    /// Write the sweep as TSV to this path instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Parser)]
#[command(
    name = "fraudscope",
    about = "Threshold exploration for scored fraud predictions",
    long_about = "Applies an adjustable fraud-probability threshold to a fixed set of scored \
                 accounts and reports the resulting confusion matrix and risk tier."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the analyst dashboard for one threshold
    #[command(about = "Render the analyst dashboard for one threshold")]
    Dashboard(DashboardArgs),

    /// Evaluate every threshold the control offers
    #[command(about = "Evaluate every threshold stop (outputs: TSV)")]
    Sweep(SweepArgs),

    /// List the risk tier and trend wording at each threshold stop
    #[command(about = "List risk tiers per threshold stop")]
    Tiers,

    /// Display version information
    #[command(about = "Display version information")]
    Version,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Cli { command } = Cli::parse();

    let result = match command {
        Some(Commands::Dashboard(args)) => run_dashboard(args),
        Some(Commands::Sweep(args)) => run_sweep(args),
        Some(Commands::Tiers) => run_tiers(),
        Some(Commands::Version) => {
            print_version_info();
            Ok(())
        }
        None => Cli::command()
            .print_help()
            .map(|()| println!())
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error>),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn print_version_info() {
    println!("fraudscope {}", env!("CARGO_PKG_VERSION"));
    match option_env!("FRAUDSCOPE_RELEASE_TAG") {
        Some(tag) => println!("Release: {}", tag),
        None => println!("Release: development build"),
    }
}

fn run_dashboard(args: DashboardArgs) -> Result<(), Box<dyn std::error::Error>> {
    let profile = match &args.config {
        Some(path) => AnalystConfig::load(path)?,
        None => AnalystConfig::default(),
    };
    let config = profile.with_overrides(args.dataset, args.threshold, args.account);

    let request = DashboardRequest {
        setting: config.setting()?,
        account: config.account_id()?,
        dataset_path: config.dataset.clone(),
    };

    // Dataset failures are rendered as a warning; only the matrix panel depends on them.
    let dataset = load_scored_records(&request.dataset_path);
    let view = build_view(&request, &dataset)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_dashboard(&view, &mut out)?;
    out.flush()?;

    if let Some(path) = args.report {
        EvaluationReport::from(&view).save(&path)?;
        println!("Report saved to: {}", path.display());
    }
    Ok(())
}

fn render_dashboard(view: &DashboardView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Ethereum Fraud Detection – Analyst Dashboard")?;
    writeln!(out)?;
    writeln!(out, "Analyst Controls")?;
    writeln!(
        out,
        "  Fraud Risk Threshold: {} (range {SLIDER_MIN:.2}-{SLIDER_MAX:.2}, step 0.05)",
        view.setting
    )?;
    writeln!(out)?;
    for line in TRADEOFF_GUIDANCE.lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;

    writeln!(out, "Operational Risk Metrics")?;
    writeln!(out, "  Risk tier:       {}", view.summary.tier)?;
    writeln!(out, "  Fraud Recall:    {}", view.summary.fraud_recall_trend)?;
    writeln!(out, "  False Positives: {}", view.summary.false_positive_trend)?;
    writeln!(out)?;

    writeln!(out, "Account-Level Risk Exploration")?;
    match view.account {
        Some(account) => {
            writeln!(out, "  Selected account: {account}")?;
            writeln!(out, "  Why is this account risky?")?;
            writeln!(out, "  {RISK_FACTOR_HEADING}")?;
            for factor in account.risk_factors() {
                writeln!(out, "    • {factor}")?;
            }
        }
        None => {
            writeln!(
                out,
                "  No account selected. Use --account with one of: {}",
                AccountId::ALL.iter().map(|id| id.as_str()).join(", ")
            )?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Dynamic Confusion Matrix")?;
    match &view.panel {
        MatrixPanel::Ready(evaluation) => {
            let grid = evaluation.matrix.to_grid();
            let width = grid.iter().map(|v| v.to_string().len()).max().unwrap_or(1).max(11);
            writeln!(out, "  Confusion Matrix (Threshold = {})", view.setting)?;
            writeln!(
                out,
                "  {:<10}{:>width$}  {:>width$}",
                "",
                "Predicted 0",
                "Predicted 1"
            )?;
            for (label, row) in ["Actual 0", "Actual 1"].iter().zip(grid.rows()) {
                writeln!(
                    out,
                    "  {:<10}{:>width$}  {:>width$}",
                    label,
                    row[0],
                    row[1]
                )?;
            }
            let rates = evaluation.rates();
            writeln!(
                out,
                "  Recall {:.3}  Precision {:.3}  False positive rate {:.3}  Accuracy {:.3}  F1 {:.3}",
                rates.recall, rates.precision, rates.false_positive_rate, rates.accuracy, rates.f1
            )?;
        }
        MatrixPanel::Unavailable { banner, detail } => {
            writeln!(out, "  WARNING: {banner}")?;
            writeln!(out, "  {detail}")?;
        }
    }
    Ok(())
}

fn run_sweep(args: SweepArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = load_scored_records(&args.dataset)?;
    let thresholds: Vec<f64> = ThresholdSetting::stops()
        .into_iter()
        .map(ThresholdSetting::value)
        .collect();
    let evaluations = sweep(&dataset.records, &thresholds)?;

    let mut builder = csv::WriterBuilder::new();
    builder.delimiter(b'\t');
    match &args.out {
        Some(path) => {
            let mut writer = builder.from_path(path)?;
            for evaluation in &evaluations {
                writer.serialize(SweepRow::from(evaluation))?;
            }
            writer.flush()?;
            println!(
                "Sweep of {} thresholds over {} records saved to: {}",
                evaluations.len(),
                dataset.len(),
                path.display()
            );
        }
        None => {
            let mut writer = builder.from_writer(io::stdout());
            for evaluation in &evaluations {
                writer.serialize(SweepRow::from(evaluation))?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn run_tiers() -> Result<(), Box<dyn std::error::Error>> {
    for setting in ThresholdSetting::stops() {
        let summary = fraudscope::tier::summary_for(setting.value());
        println!(
            "{setting}\t{}\t{}\t{}",
            summary.tier, summary.fraud_recall_trend, summary.false_positive_trend
        );
    }
    Ok(())
}
