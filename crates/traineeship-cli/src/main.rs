//! traineeship CLI — mark quizzes and summarize trainees.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "traineeship",
    version,
    about = "Trainee assessment and quiz marking"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark quizzes and generate assessments
    Mark {
        /// Path to a quiz .toml file or directory (default: configured quiz_dir)
        #[arg(long)]
        quiz: Option<PathBuf>,

        /// Trainee .toml file to attach the generated assessments to
        #[arg(long)]
        trainee: Option<PathBuf>,

        /// Write a JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write a timestamped JSON report into the configured output_dir
        #[arg(long, conflicts_with = "output")]
        save: bool,
    },

    /// Validate quiz TOML files
    Validate {
        /// Path to a quiz file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Show a trainee's details and assessment statistics
    Summary {
        /// Trainee .toml file
        #[arg(long)]
        trainee: PathBuf,
    },

    /// Create starter config, example quiz and example trainee
    Init,
}

fn main() {
    let cli = Cli::parse();

    let config = match config::load_config_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "loaded configuration");

    let result = match cli.command {
        Commands::Mark {
            quiz,
            trainee,
            output,
            save,
        } => commands::mark::execute(&config, quiz, trainee, output, save),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Summary { trainee } => commands::summary::execute(trainee),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
