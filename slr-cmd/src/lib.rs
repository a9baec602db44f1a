//! Command implementations for the launch records CLI.
//!
//! Every subcommand loads the dataset (the embedded one unless `--csv` is
//! given), runs it through the same layout and handlers the dashboard uses,
//! and prints the result to stdout.

use clap::Subcommand;
use slr_dash::LaunchContext;

pub mod figures;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Summarize the dataset: record count, payload bounds, per-site outcomes
    Summary {
        /// Path to a launch CSV (defaults to the embedded dataset)
        #[arg(short = 'c', long)]
        csv: Option<String>,
    },

    /// Print the dashboard layout as JSON
    Layout {
        /// Path to a launch CSV (defaults to the embedded dataset)
        #[arg(short = 'c', long)]
        csv: Option<String>,
    },

    /// Print the success pie chart definition as JSON
    Pie {
        /// Path to a launch CSV (defaults to the embedded dataset)
        #[arg(short = 'c', long)]
        csv: Option<String>,

        /// Launch site, or ALL for every site
        #[arg(short = 's', long, default_value = "ALL")]
        site: String,
    },

    /// Print the payload/outcome scatter chart definition as JSON
    Scatter {
        /// Path to a launch CSV (defaults to the embedded dataset)
        #[arg(short = 'c', long)]
        csv: Option<String>,

        /// Launch site, or ALL for every site
        #[arg(short = 's', long, default_value = "ALL")]
        site: String,

        /// Lowest payload mass in kg (defaults to the dataset minimum)
        #[arg(long)]
        low: Option<f64>,

        /// Highest payload mass in kg (defaults to the dataset maximum)
        #[arg(long)]
        high: Option<f64>,
    },
}

/// Load the dataset named by `--csv`, or the embedded one.
pub fn load_context(csv: Option<&str>) -> anyhow::Result<LaunchContext> {
    match csv {
        Some(path) => {
            log::info!("Loading launch records from {}", path);
            LaunchContext::from_path(path)
        }
        None => LaunchContext::embedded(),
    }
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let output = match command {
        Command::Summary { csv } => {
            let ctx = load_context(csv.as_deref())?;
            summary::render_summary(&ctx)?
        }
        Command::Layout { csv } => {
            let ctx = load_context(csv.as_deref())?;
            figures::render_layout(ctx)?
        }
        Command::Pie { csv, site } => {
            let ctx = load_context(csv.as_deref())?;
            figures::render_pie(ctx, &site)?
        }
        Command::Scatter {
            csv,
            site,
            low,
            high,
        } => {
            let ctx = load_context(csv.as_deref())?;
            figures::render_scatter(ctx, &site, low, high)?
        }
    };
    println!("{}", output);
    Ok(())
}
