use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use ipa_dict::{build, BuildConfig, DictError};

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    ipa_dict::logging::init(cli.verbosity());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), DictError> {
    let cfg = match &cli.config {
        Some(path) => BuildConfig::load(&cli.root.join(path))?,
        None => BuildConfig::default(),
    }
    .rooted(&cli.root);
    debug!(?cfg, "resolved build config");

    let report = build(&cfg, &cli.request())?;

    if cli.report {
        let json = serde_json::to_string_pretty(&report).map_err(DictError::Report)?;
        println!("{json}");
    }

    Ok(())
}
