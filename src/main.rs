use anyhow::Context;
use clap::Parser;
use tally::cli::{Cli, Command};
use tally::{logging, server, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(command @ Command::Serve { bind, .. }) => {
            logging::init_stderr_tracing();
            let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            runtime
                .block_on(server::serve(*bind, command.serve_options()))
                .with_context(|| format!("Counting service on {} failed", bind))
        }
        None => {
            logging::init_tui_tracing();
            let config = cli.load_config()?;
            ui::runtime::run(config)
        }
    }
}
