//! WQV CLI - Command line tool for querying water-quality snapshots and
//! resolving pre-rendered map images.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wqv-cli",
    version,
    about = "Water-quality viewer data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wqv_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wqv_cmd::run(cli.command)
}
