//! pincert CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(name = "pincert", version, about = "Training certification tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess learner submissions against a course
    Evaluate {
        /// Path to the course .toml file
        #[arg(long)]
        course: PathBuf,

        /// Submission .toml file or directory of submissions
        #[arg(long)]
        submission: PathBuf,

        /// Pass threshold percentage (overrides course and config)
        #[arg(long)]
        threshold: Option<u32>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compute a percentage score from correct/total counts
    Score {
        /// Number of correct answers
        correct: u32,

        /// Number of questions
        total: u32,

        /// Rounding mode: half-away-from-zero, half-to-even
        #[arg(long)]
        rounding: Option<String>,

        /// Fail instead of scoring 0 when total is 0
        #[arg(long)]
        strict: bool,
    },

    /// Summarise a cohort of submissions for one course
    Summary {
        /// Path to the course .toml file
        #[arg(long)]
        course: PathBuf,

        /// Directory of submission .toml files
        #[arg(long)]
        submissions: PathBuf,

        /// Pass threshold percentage (overrides course and config)
        #[arg(long)]
        threshold: Option<u32>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate course TOML files
    Validate {
        /// Path to course file or directory (default: courses_dir from config)
        #[arg(long)]
        course: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example course
    Init,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pincert=info,pincert_core=info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            course,
            submission,
            threshold,
            format,
            config,
        } => commands::evaluate::execute(course, submission, threshold, format, config),
        Commands::Score {
            correct,
            total,
            rounding,
            strict,
        } => commands::score::execute(correct, total, rounding, strict),
        Commands::Summary {
            course,
            submissions,
            threshold,
            format,
            config,
        } => commands::summary::execute(course, submissions, threshold, format, config),
        Commands::Validate { course, config } => commands::validate::execute(course, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
