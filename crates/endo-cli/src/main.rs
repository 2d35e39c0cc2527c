//! endo - command-line interface for the hormone status pipeline.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "endo")]
#[command(author, version, about = "Saliva hormone status pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the artifact bundle and dataset export
    #[arg(long, global = true, default_value = "data")]
    data_dir: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic dataset and train the classifier
    Train {
        /// Number of samples to generate
        #[arg(short, long, default_value = "2000")]
        samples: usize,

        /// Seed for generation and model fitting
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Skip the hyperparameter grid search and use fixed parameters
        #[arg(long)]
        no_optimize: bool,
    },

    /// Summarize the exported dataset
    Info,

    /// Predict hormonal status for one saliva reading
    Predict {
        /// Cortisol level (ng/mL)
        cortisol: f64,

        /// Estrogen level (pg/mL)
        estrogen: f64,

        /// Testosterone level (pg/mL)
        testosterone: f64,

        /// Subject age in years
        #[arg(short, long, default_value = "35")]
        age: u32,

        /// Subject gender: Male or Female
        #[arg(short, long, default_value = "Male")]
        gender: String,

        /// Sample time: Morning, Afternoon or Evening
        #[arg(short, long, default_value = "Morning")]
        time: String,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let mut config = endo_core::config::PipelineConfig::with_data_dir(&cli.data_dir);

    match cli.command {
        Commands::Train {
            samples,
            seed,
            no_optimize,
        } => {
            config.training_samples = samples;
            config.seed = seed;
            config.optimize = !no_optimize;
            commands::train::run(&config)
        }
        Commands::Info => commands::info::run(&config),
        Commands::Predict {
            cortisol,
            estrogen,
            testosterone,
            age,
            gender,
            time,
            json,
        } => commands::predict::run(
            &config,
            cortisol,
            estrogen,
            testosterone,
            age,
            &gender,
            &time,
            json,
        ),
    }
}
