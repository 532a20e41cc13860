use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use gesture_core::cli::print_capture_report;
use gesture_core::config::Config;
use gesture_core::export::export_dataset;
use gesture_core::payload::build_feature_payload_with;
use gesture_core::predictor::{predict_capture, HttpPredictor};
use gesture_core::storage::load_capture;

/// Gesture toolkit - feature payloads, dataset export and prediction
#[derive(Parser, Debug)]
#[command(name = "gesture-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (JSON)
    #[arg(short, long, global = true, default_value = "gesture.json")]
    config: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a CSV dataset from all stored captures
    Export {
        /// Directory with stored capture JSON files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Output directory for the CSV file
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Print the feature payload of one stored capture
    Features {
        /// Stored capture file
        file: PathBuf,
    },

    /// Send one stored capture to the predictor
    Predict {
        /// Stored capture file
        file: PathBuf,

        /// Predictor base URL (overrides config)
        #[arg(long)]
        url: Option<String>,
    },

    /// Human-readable summary of one stored capture
    Report {
        /// Stored capture file
        file: PathBuf,
    },

    /// Check the predictor health endpoint
    Health {
        #[arg(long)]
        url: Option<String>,
    },
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let cfg = Config::load(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?
        .with_env_overrides();
    let target = cfg.target()?;

    match cli.command {
        Commands::Export { data_dir, out_dir } => {
            let data_dir = data_dir.unwrap_or_else(|| cfg.data_dir.clone());
            let out_dir = out_dir.unwrap_or_else(|| cfg.dataset_dir());
            let summary = export_dataset(&data_dir, &out_dir, target)?;

            println!("Dataset created: {}", summary.path.display());
            println!("Rows: {}, skipped: {}", summary.rows, summary.failures.len());
            for f in &summary.failures {
                println!("  skipped {}: {}", f.path.display(), f.reason);
            }
        }
        Commands::Features { file } => {
            let capture = load_capture(&file)?;
            let payload = build_feature_payload_with(&capture.readings, Some(capture.label.as_str()), target);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Commands::Predict { file, url } => {
            let capture = load_capture(&file)?;
            let predictor = HttpPredictor::new(url.unwrap_or_else(|| cfg.model_url.clone()), cfg.timeout());
            let state = predict_capture(&predictor, &capture.readings);
            println!("{state}");
        }
        Commands::Report { file } => {
            let capture = load_capture(&file)?;
            print_capture_report(&capture, target);
        }
        Commands::Health { url } => {
            let predictor = HttpPredictor::new(url.unwrap_or_else(|| cfg.model_url.clone()), cfg.timeout());
            let ok = predictor.health();
            println!("{}: {}", predictor.base_url(), if ok { "ok" } else { "unavailable" });
        }
    }

    Ok(())
}
