//! SpaceX CLI - inspect launch records and the dashboard's chart figures.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "spacex-cli",
    version,
    about = "SpaceX launch records dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: spacex_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    spacex_cmd::run(cli.command)
}
