//! Command implementations for the SpaceX CLI.
//!
//! Every subcommand loads the launch CSV the same way the dashboard does, so
//! a file the dashboard would refuse is refused here too.

use anyhow::Context;
use clap::Subcommand;
use spacex_figures::Dashboard;
use std::path::Path;

pub mod figures;
pub mod inspect;

/// Launch records file, relative to the workspace root.
pub const DEFAULT_CSV: &str = "fixtures/spacex_launch_dash.csv";

#[derive(Subcommand)]
pub enum Command {
    /// List the distinct launch sites and the payload range of the data
    Sites {
        /// Path to the launch records CSV
        #[arg(short = 'f', long, default_value = DEFAULT_CSV)]
        csv: String,
    },

    /// Launches, successes and success rate per site
    Summary {
        /// Path to the launch records CSV
        #[arg(short = 'f', long, default_value = DEFAULT_CSV)]
        csv: String,
    },

    /// Print the success pie figure as JSON
    Pie {
        /// Path to the launch records CSV
        #[arg(short = 'f', long, default_value = DEFAULT_CSV)]
        csv: String,

        /// Launch site, or ALL
        #[arg(short = 's', long, default_value = "ALL")]
        site: String,
    },

    /// Print the payload-vs-outcome scatter figure as JSON
    Scatter {
        /// Path to the launch records CSV
        #[arg(short = 'f', long, default_value = DEFAULT_CSV)]
        csv: String,

        /// Launch site, or ALL
        #[arg(short = 's', long, default_value = "ALL")]
        site: String,

        /// Lowest payload mass in kg (inclusive)
        #[arg(long, default_value_t = 0.0)]
        low: f64,

        /// Highest payload mass in kg (inclusive)
        #[arg(long, default_value_t = 10000.0)]
        high: f64,
    },
}

/// Read and load the launch CSV at `path`.
pub fn load_dashboard(path: &str) -> anyhow::Result<Dashboard> {
    let path = Path::new(path);
    if !path.exists() {
        anyhow::bail!("{} not found", path.display());
    }
    log::info!("[SpaceX] cli: loading launch records from {}", path.display());
    let csv_data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Dashboard::load(&csv_data)
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let output = match command {
        Command::Sites { csv } => inspect::sites_report(&load_dashboard(&csv)?)?,
        Command::Summary { csv } => inspect::summary_report(&load_dashboard(&csv)?)?,
        Command::Pie { csv, site } => figures::pie_json(&load_dashboard(&csv)?, &site)?,
        Command::Scatter {
            csv,
            site,
            low,
            high,
        } => figures::scatter_json(&load_dashboard(&csv)?, &site, low, high)?,
    };
    println!("{}", output);
    Ok(())
}
