use anyhow::Result;
use clap::Subcommand;

use super::helpers;
use crate::output::{print_json, print_success, prompt, render, theme, OutputMode};

#[derive(Subcommand)]
pub enum PrefsCmd {
    Show,
    Reset(ResetArgs),
}

#[derive(clap::Args)]
pub struct ResetArgs {
    #[arg(long, help = "Skip confirmation prompt")]
    yes: bool,
}

pub async fn execute(
    cmd: PrefsCmd,
    mode: OutputMode,
    prefs_path: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let prefs = helpers::open_preferences(prefs_path.as_deref(), config_path.as_deref())?;

    match cmd {
        PrefsCmd::Show => {
            let state = prefs.load();
            match mode {
                OutputMode::Json => print_json(&state)?,
                OutputMode::Human => render::print_preferences(&state, prefs.store().path()),
            }
        }
        PrefsCmd::Reset(args) => {
            if mode == OutputMode::Human
                && !args.yes
                && !prompt::confirm("Reset state filter, search and annotations?")
            {
                theme::print_dim("Cancelled.");
                return Ok(());
            }
            prefs.reset();
            match mode {
                OutputMode::Json => print_json(&prefs.load())?,
                OutputMode::Human => print_success("Preferences reset to defaults"),
            }
        }
    }

    Ok(())
}
