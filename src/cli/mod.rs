//! Command line interface.

pub mod command;

use std::path::PathBuf;
use std::time::Duration;

use clap::{command, Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::navigate::webdriver::{DEFAULT_WEBDRIVER_URL, PORTAL_URL};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk every location/station pair on the portal, appending one record
    /// per station to the log
    Harvest(HarvestArgs),
    /// Summarise the log and print stations matching the configured bounds
    Query(QueryArgs),
}

#[derive(Args)]
pub struct HarvestArgs {
    /// Log file to append to (defaults to `normals-log.txt` in the home
    /// directory)
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// WebDriver endpoint to drive the portal through
    #[arg(long, default_value = DEFAULT_WEBDRIVER_URL)]
    pub webdriver: String,

    /// Portal landing page
    #[arg(long, default_value = PORTAL_URL)]
    pub portal: String,

    /// Location index to start from
    #[arg(long, default_value_t = 0)]
    pub location: usize,

    /// Station index to start from
    #[arg(long, default_value_t = 0)]
    pub station: usize,

    /// Resume from the checkpoint left by an aborted run
    #[arg(long)]
    pub resume: bool,

    /// Upper bound in seconds on each wait for the portal to go idle
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Log file to read (defaults to `normals-log.txt` in the home
    /// directory)
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Keep stations whose lowest monthly low is at least this (°F)
    #[arg(long)]
    pub min_low: Option<f32>,

    /// Keep stations whose lowest monthly high is at least this (°F)
    #[arg(long)]
    pub min_high: Option<f32>,

    /// Keep stations whose highest monthly high is at most this (°F)
    #[arg(long)]
    pub max_high: Option<f32>,
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    ProgressBar::new(size).with_message(message).with_style(
        ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    )
}
