//! SLR CLI - Command line tool for inspecting launch records and dashboard charts.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "slr-cli",
    version,
    about = "SpaceX launch records dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: slr_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    slr_cmd::run(cli.command)
}
