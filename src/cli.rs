use clap::{ArgAction, Parser};
use std::path::PathBuf;

use ipa_dict::logging::Verbosity;
use ipa_dict::BuildRequest;

/// Build IPA dictionaries from data files
#[derive(Parser, Debug)]
#[command(name = "ipa-dict", version)]
pub struct Cli {
    /// Language codes to process (default: all)
    #[arg(value_name = "CODE")]
    pub codes: Vec<String>,

    /// Build DSL dictionaries
    #[arg(long, action = ArgAction::Count, help_heading = "Targets")]
    pub dsl: u8,

    /// Build a target by name (default: dsl)
    #[arg(long = "target", value_name = "NAME", help_heading = "Targets")]
    pub targets: Vec<String>,

    /// Directory holding LANGUAGES.tsv and data/; outputs are written here too
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// JSON file overriding input and output locations
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a JSON summary of the build on stdout
    #[arg(long)]
    pub report: bool,

    /// Only print warnings and errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show debug diagnostics (honours RUST_LOG)
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    /// `--dsl` flags first, then `--target` names, in the order given.
    pub fn request(&self) -> BuildRequest {
        let mut targets: Vec<String> = (0..self.dsl).map(|_| "dsl".to_string()).collect();
        targets.extend(self.targets.iter().cloned());

        BuildRequest {
            targets,
            codes: self.codes.clone(),
        }
    }
}
