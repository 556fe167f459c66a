//! Stitch CLI - single-page HTML assembler
//!
//! Usage: stitch [--watch] [--json] [--color <WHEN>]
//!
//! Builds `dist/index.html` from `src/index.html` once; with `--watch`,
//! keeps rebuilding whenever a file under `src/` changes.

mod cli;
mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use stitch::BuildConfig;
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.color);

    match run(&cli, &ui) {
        Ok(code) => code,
        Err(err) => {
            eprint!("{}", ui::error::format_error(&err, ui.color, ui.unicode));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, ui: &UiContext) -> Result<ExitCode> {
    let project_root = std::env::current_dir()?;

    let (config, warnings) = stitch::config::load_or_default(&project_root)?;
    if !ui.json {
        for warning in &warnings {
            eprint!(
                "{}",
                ui::views::build::render_config_warning(warning, ui.color, ui.unicode)
            );
        }
    }
    let config = BuildConfig::from_config(project_root, &config);

    // The initial build is fatal; rebuilds inside the watch loop are not.
    if !commands::build::cmd_build(ui, &config) {
        return Ok(ExitCode::FAILURE);
    }

    if cli.watch {
        commands::watch::cmd_watch(ui, &config)?;
    }

    Ok(ExitCode::SUCCESS)
}
