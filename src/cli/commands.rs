use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use crate::client;
use crate::config::{AppConfig, ClientMode};
use crate::flow::{self, EnhanceRequest};
use crate::history::{FileStore, HistoryRepository, KeyValueStore};
use crate::models::{MediaSource, MediaType};
use crate::utils::{default_config_path, default_data_dir};

#[derive(Parser)]
#[command(name = "refiner")]
#[command(version = "0.1.0")]
#[command(about = "Send media to the enhancement service and browse past results", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the history store and downloaded artifacts
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Use the live processing service instead of the mock
    #[arg(long, global = true)]
    pub live: bool,

    /// Base URL of the live processing service
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enhance a media file and record the result
    Process(ProcessArgs),
    /// Browse and manage the processing history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
}

#[derive(Args)]
pub struct ProcessArgs {
    /// Media file to enhance
    pub media: PathBuf,

    /// Kind of media
    #[arg(long, value_enum, default_value_t = MediaType::Image)]
    pub kind: MediaType,

    /// Where the media came from
    #[arg(long, value_enum, default_value_t = MediaSource::Gallery)]
    pub source: MediaSource,

    /// Transformation label sent to the service
    #[arg(long, default_value = "enhance")]
    pub mode: String,

    /// Skip recording the result in history
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List past operations, newest first
    List,
    /// Delete one record by id
    Delete { id: String },
    /// Remove the entire history
    Clear,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let data_dir = match (&cli.data_dir, &config.data_dir) {
        (Some(dir), _) => dir.clone(),
        (None, Some(dir)) => dir.clone(),
        (None, None) => default_data_dir()?,
    };
    let repo = HistoryRepository::new(FileStore::new(&data_dir));

    match &cli.command {
        Some(Commands::Process(args)) => run_process(&config, &repo, args, &data_dir)?,
        Some(Commands::History { command }) => match command {
            HistoryCommands::List => list_history(&repo),
            HistoryCommands::Delete { id } => {
                repo.delete_by_id(id).context("Failed to delete history record")?;
                println!("Deleted {id}");
            }
            HistoryCommands::Clear => {
                repo.clear().context("Failed to clear history")?;
                println!("History cleared");
            }
        },
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Load the config file and fold in the CLI overrides.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let mut config = AppConfig::load(&path)?;

    if cli.live {
        config.mode = ClientMode::Live;
    }
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }

    Ok(config)
}

fn run_process<S: KeyValueStore>(
    config: &AppConfig,
    repo: &HistoryRepository<S>,
    args: &ProcessArgs,
    data_dir: &Path,
) -> Result<()> {
    // Stand-in for the platform permission gate: the media must be readable
    // before the flow starts
    if !args.media.is_file() {
        bail!("cannot read media file: {}", args.media.display());
    }

    let client = client::from_config(config, data_dir)?;
    let request = EnhanceRequest {
        media: args.media.clone(),
        kind: args.kind,
        source: args.source,
        mode: args.mode.clone(),
        save: !args.no_save,
    };

    println!("Processing {} ({}, mode: {})...", args.media.display(), args.kind, args.mode);
    let outcome = flow::enhance(client.as_ref(), repo, &request)?;

    println!("Processed in {:.1}s", outcome.result.processing_time);
    println!("Artifact: {}", outcome.artifact.display());
    if let Some(record) = &outcome.record {
        println!("Recorded as {}", record.id);
    }

    Ok(())
}

fn list_history<S: KeyValueStore>(repo: &HistoryRepository<S>) {
    let records = repo.list();
    if records.is_empty() {
        println!("History is empty");
        return;
    }

    println!("{} record(s), newest first", records.len());
    for record in records {
        println!(
            "{}  {}  {:>5}  {:>7}  {}",
            record.id,
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.kind,
            record.source,
            record.processed_uri
        );
    }
}
