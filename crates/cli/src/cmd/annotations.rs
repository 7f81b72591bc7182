use anyhow::Result;
use clap::Subcommand;

use super::helpers;
use crate::output::{print_json, print_success, theme, OutputMode};

#[derive(Subcommand)]
pub enum AnnotationsCmd {
    On,
    Off,
    Toggle,
    Show,
}

pub async fn execute(
    cmd: AnnotationsCmd,
    mode: OutputMode,
    prefs_path: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let prefs = helpers::open_preferences(prefs_path.as_deref(), config_path.as_deref())?;

    let (on, changed) = match cmd {
        AnnotationsCmd::On => {
            prefs.set_show_annotations(true);
            (true, true)
        }
        AnnotationsCmd::Off => {
            prefs.set_show_annotations(false);
            (false, true)
        }
        AnnotationsCmd::Toggle => (prefs.toggle_annotations(), true),
        AnnotationsCmd::Show => (prefs.show_annotations(), false),
    };

    match mode {
        OutputMode::Json => print_json(&serde_json::json!({ "show_annotations": on }))?,
        OutputMode::Human => {
            let label = if on { "on" } else { "off" };
            if changed {
                print_success(&format!("Annotations {label}"));
            } else {
                theme::print_kv_colored("Annotations", label, on);
            }
        }
    }

    Ok(())
}
