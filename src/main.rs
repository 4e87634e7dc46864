//! playreel - animate the longest play from an NFL stats report

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use playreel::cli::{Cli, Commands, ConfigCommands};
use playreel::tui::{current_theme, init_theme};
use playreel::{logging, Config};

mod commands;

use commands::frame::FrameTarget;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", current_theme().error_text(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    // A broken config file must not lock the user out of `config edit`.
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if matches!(cli.command, Commands::Config(_)) => {
            eprintln!("{}", current_theme().error_text(&format!("Warning: {:#}", e)));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    logging::init_logging(&config.logging, cli.verbose)?;
    init_theme(config.player.theme);

    let found = match &cli.command {
        Commands::Play { input, no_autoplay } => {
            commands::play::handle(input, *no_autoplay, &config)?;
            true
        }
        Commands::Extract { input, compact } => commands::extract::handle(input, *compact)?,
        Commands::Frame {
            input,
            at,
            output,
            sequence,
            fps,
            scale,
        } => {
            let target = match (sequence, output) {
                (Some(dir), _) => FrameTarget::Sequence { dir, fps: *fps },
                (None, Some(output)) => FrameTarget::Single { at: *at, output },
                (None, None) => anyhow::bail!("Either --output or --sequence is required"),
            };
            commands::frame::handle(input, target, *scale, &config)?
        }
        Commands::Config(cmd) => {
            match cmd {
                ConfigCommands::Show => commands::config::handle_show(&config)?,
                ConfigCommands::Edit => commands::config::handle_edit()?,
                ConfigCommands::Migrate => commands::config::handle_migrate()?,
            }
            true
        }
        Commands::Completions { shell } => {
            commands::handle_completions(*shell)?;
            true
        }
    };

    Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
