//! Command line definition
//!
//! Lives in the library so `xtask` can generate man pages from it.

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;
use once_cell::sync::Lazy;

use crate::envelope::{InputError, InputSource};

/// Version with build date, plus the git SHA outside release builds.
pub static VERSION: Lazy<String> = Lazy::new(|| {
    let mut version = format!(
        "{} (built {})",
        env!("CARGO_PKG_VERSION"),
        env!("PLAYREEL_BUILD_DATE")
    );
    if let Some(sha) = option_env!("VERGEN_GIT_SHA") {
        version.push_str(&format!(" [{}]", sha));
    }
    version
});

#[derive(Parser, Debug)]
#[command(
    name = "playreel",
    version = VERSION.as_str(),
    about = "Animate the longest play from an NFL stats report",
    long_about = "Reconstructs a play from a query service report and animates it on a 2D field.\n\n\
                  Only \"longest play\" queries (e.g. \"longest catch by travis kelce\") are animated;\n\
                  anything else prints the report unchanged."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Animate the play in the terminal
    #[command(long_about = "Animate the play in the terminal.\n\n\
        Keys: r/Enter/Space replay (once the current run is over), q/Esc quit.\n\
        When the input is not a longest-play result, the report is printed instead.")]
    Play {
        #[command(flatten)]
        input: InputArgs,

        /// Wait for a replay key instead of starting immediately
        #[arg(long)]
        no_autoplay: bool,
    },

    /// Print the resolved play event as JSON
    #[command(long_about = "Print the resolved play event as JSON.\n\n\
        Exits with status 1 when the input does not describe a longest play.")]
    Extract {
        #[command(flatten)]
        input: InputArgs,

        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Render frames of the animation as SVG
    #[command(group(ArgGroup::new("target").required(true).args(["output", "sequence"])))]
    Frame {
        #[command(flatten)]
        input: InputArgs,

        /// Animation progress of the frame, from 0 to 1
        #[arg(long, default_value_t = 1.0, value_parser = parse_progress)]
        at: f64,

        /// Write a single frame to this file ('-' for stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the whole animation as numbered frames into this directory
        #[arg(long, value_name = "DIR", conflicts_with = "at")]
        sequence: Option<PathBuf>,

        /// Frames per second for --sequence
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
        fps: u32,

        /// Pixel scale over the 800x300 field (default from config)
        #[arg(long)]
        scale: Option<f64>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Add fields missing from the config file
    Migrate,
}

/// Where the play comes from.
#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("source").required(true).args(["envelope", "query"])))]
pub struct InputArgs {
    /// Query service response (JSON envelope); '-' reads stdin
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["query", "report"])]
    pub envelope: Option<PathBuf>,

    /// The query that produced the report
    #[arg(short, long, value_name = "TEXT", requires = "report")]
    pub query: Option<String>,

    /// Plain-text report; '-' reads stdin
    #[arg(short, long, value_name = "FILE", requires = "query")]
    pub report: Option<PathBuf>,
}

impl InputArgs {
    pub fn source(&self) -> Result<InputSource, InputError> {
        match (&self.envelope, &self.query, &self.report) {
            (Some(path), _, _) => Ok(InputSource::Envelope(path.clone())),
            (None, Some(query), Some(report)) => Ok(InputSource::Report {
                query: query.clone(),
                report: report.clone(),
            }),
            _ => Err(InputError::Missing),
        }
    }
}

fn parse_progress(value: &str) -> Result<f64, String> {
    let t: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if t.is_finite() && (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        Err(format!("progress must be between 0 and 1, got {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_envelope_input() {
        let cli = Cli::try_parse_from(["playreel", "extract", "--envelope", "resp.json"]).unwrap();
        match cli.command {
            Commands::Extract { input, compact } => {
                assert!(!compact);
                assert_eq!(input.source().unwrap(), InputSource::Envelope(PathBuf::from("resp.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn query_requires_report() {
        assert!(Cli::try_parse_from(["playreel", "play", "--query", "longest run"]).is_err());
    }

    #[test]
    fn envelope_conflicts_with_query() {
        let result = Cli::try_parse_from([
            "playreel", "extract", "-e", "a.json", "-q", "longest run", "-r", "r.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn some_input_is_required() {
        assert!(Cli::try_parse_from(["playreel", "extract"]).is_err());
    }

    #[test]
    fn frame_progress_is_validated() {
        let base = ["playreel", "frame", "-e", "a.json", "-o", "f.svg", "--at"];
        assert!(Cli::try_parse_from(base.iter().chain(["0.5"].iter())).is_ok());
        assert!(Cli::try_parse_from(base.iter().chain(["1.5"].iter())).is_err());
        assert!(Cli::try_parse_from(base.iter().chain(["NaN"].iter())).is_err());
    }

    #[test]
    fn frame_needs_a_target() {
        assert!(Cli::try_parse_from(["playreel", "frame", "-e", "a.json"]).is_err());
        assert!(Cli::try_parse_from(["playreel", "frame", "-e", "a.json", "--sequence", "out"]).is_ok());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["playreel", "-vv", "config", "show"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Show)));
    }

    #[test]
    fn version_mentions_build_date() {
        assert!(VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(VERSION.contains("built "));
    }
}
