mod cli;
mod diagram;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod script;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::pipeline::run_pipeline;
use crate::script::messages::LogSink;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => {
            let config = args.into_config();
            let mut sink = LogSink;
            let mut stdout = std::io::stdout();
            let outcome = run_pipeline(&config, &mut sink, &mut stdout)
                .with_context(|| format!("pathway report '{}' failed", config.report_name))?;
            tracing::info!(
                report_dir = %outcome.report_dir.display(),
                files = outcome.files.len(),
                "done"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
