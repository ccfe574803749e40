//! CLI entry point for the AutoML wizard.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use automl_learning::{ProgressUpdate, Trainer, TrainingConfig};
use automl_processing::AnalysisConfig;
use automl_wizard::report::{
    render_analysis, render_preview, render_results, render_step_header, render_target_candidates,
};
use automl_wizard::{AnalysisReport, WizardState, WizardStep, demo};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Step-by-step AutoML wizard",
    long_about = "Walks a CSV through the wizard steps: upload, preview, target selection,\n\
                  analysis, training and results. Training is simulated.\n\n\
                  EXAMPLES:\n  \
                  # Explore the bundled demo dataset\n  \
                  automl-wizard --demo --target purchased\n\n  \
                  # List target candidates for your own file\n  \
                  automl-wizard -i data.csv\n\n  \
                  # Reproducible, instant run as JSON\n  \
                  automl-wizard -i data.csv -t price --seed 7 --training-delay-ms 0 --json"
)]
struct Args {
    /// Path to the CSV file to analyse
    #[arg(short, long, conflicts_with = "demo", required_unless_present = "demo")]
    input: Option<PathBuf>,

    /// Use the bundled 15-row customer dataset
    #[arg(long)]
    demo: bool,

    /// Target column to predict
    ///
    /// Without it the run stops after the preview and lists the candidates
    #[arg(short, long)]
    target: Option<String>,

    /// Preview page to show (10 rows per page, 1-based)
    #[arg(long, default_value = "1")]
    page: usize,

    /// Seed for the correlation placeholder (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated training time in milliseconds
    #[arg(long, default_value = "2000")]
    training_delay_ms: u64,

    /// Number of data lines used for column type inference
    #[arg(long, default_value = "10")]
    sample_rows: usize,

    /// Distinct numeric values above which a distribution is binned
    #[arg(long, default_value = "15")]
    bin_threshold: usize,

    /// Number of bins for binned distributions
    #[arg(long, default_value = "10")]
    bin_count: usize,

    /// Make the last bin half-open so values equal to the maximum are dropped
    #[arg(long)]
    exclusive_last_bin: bool,

    /// Output the final wizard state as JSON instead of text
    ///
    /// Disables all logs and step reports
    #[arg(long)]
    json: bool,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// JSON document printed with `--json`.
#[derive(Serialize)]
struct RunOutput<'a> {
    state: &'a WizardState,
    analysis: Option<&'a AnalysisReport>,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is disabled so stdout only carries JSON.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let analysis_config = AnalysisConfig::builder()
        .type_sample_rows(args.sample_rows)
        .binning_threshold(args.bin_threshold)
        .bin_count(args.bin_count)
        .include_max_in_last_bin(!args.exclusive_last_bin)
        .build()
        .context("Invalid analysis options")?;

    let training_config = TrainingConfig::builder()
        .delay_ms(args.training_delay_ms)
        .build()
        .context("Invalid training options")?;

    let (file_name, text) = load_input(&args)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(run(&args, analysis_config, training_config, &file_name, &text))
}

/// Read the CSV text named by the arguments.
fn load_input(args: &Args) -> Result<(String, String)> {
    if args.demo {
        return Ok((demo::DEMO_FILE_NAME.to_string(), demo::DEMO_CSV.to_string()));
    }

    let path = args
        .input
        .as_ref()
        .context("Either --input or --demo is required")?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok((file_name, text))
}

/// Walk the wizard steps.
///
/// Step reports use `println!` on purpose: they are the program's output and
/// must appear regardless of the log level.
async fn run(
    args: &Args,
    analysis_config: AnalysisConfig,
    training_config: TrainingConfig,
    file_name: &str,
    text: &str,
) -> Result<()> {
    let report = !args.json;
    let mut state = WizardState::with_config(analysis_config);

    // Upload
    if report {
        println!("{}", render_step_header(WizardStep::Upload));
    }
    state
        .load_dataset(file_name, text)
        .with_context(|| format!("Could not load {}", file_name))?;
    if report {
        println!(
            "Loaded {}: {} rows, {} columns",
            file_name,
            state.rows().len(),
            state.columns().len()
        );
    }

    // Preview
    if report {
        println!("{}", render_step_header(WizardStep::Preview));
        println!("{}", render_preview(state.columns(), &state.preview_page(args.page)));
    }

    // Target selection
    state.go_to(WizardStep::TargetSelection)?;
    let Some(target) = args.target.as_deref() else {
        if report {
            println!("{}", render_step_header(WizardStep::TargetSelection));
            print!("{}", render_target_candidates(&state.target_candidates()));
        } else {
            print_json(&state, None)?;
        }
        return Ok(());
    };
    let task = state.select_target(target)?;
    if report {
        println!("{}", render_step_header(WizardStep::TargetSelection));
        println!("Target: {} -> {}", target, task.display_name());
    }

    // Analysis
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let analysis = state.analyze(&mut rng)?;
    if report {
        println!("{}", render_step_header(WizardStep::Analysis));
        print!("{}", render_analysis(&analysis));
    }

    // Training
    state.go_to(WizardStep::Training)?;
    if report {
        println!("{}", render_step_header(WizardStep::Training));
    }
    let show_progress = report && !args.quiet;
    let trainer = Trainer::builder()
        .config(training_config)
        .on_progress(move |update: ProgressUpdate| {
            if show_progress {
                println!("  [{:>3.0}%] {}", update.progress * 100.0, update.message);
            }
        })
        .build();
    let best = state.train(&trainer).await?.model_name.clone();
    info!(best_model = %best, "Wizard finished");

    // Results
    if report {
        println!("{}", render_step_header(WizardStep::Results));
        print!(
            "{}",
            render_results(
                state.model_results(),
                state.selected_result(),
                &state.ranked_feature_importance()
            )
        );
    } else {
        print_json(&state, Some(&analysis))?;
    }

    Ok(())
}

fn print_json(state: &WizardState, analysis: Option<&AnalysisReport>) -> Result<()> {
    let output = RunOutput { state, analysis };
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to serialize wizard state")?
    );
    Ok(())
}
