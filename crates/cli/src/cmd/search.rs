use anyhow::Result;
use clap::Subcommand;

use super::helpers;
use crate::output::{print_json, print_success, theme, OutputMode};

#[derive(Subcommand)]
pub enum SearchCmd {
    Set(SetArgs),
    Clear,
    Show,
}

#[derive(clap::Args)]
pub struct SetArgs {
    #[arg(help = "Fuzzy search over rule names")]
    text: String,
}

pub async fn execute(
    cmd: SearchCmd,
    mode: OutputMode,
    prefs_path: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let prefs = helpers::open_preferences(prefs_path.as_deref(), config_path.as_deref())?;

    let text = match cmd {
        SearchCmd::Set(args) => {
            prefs.set_search(&args.text);
            if mode == OutputMode::Human {
                print_success(&format!("Search set to {:?}", args.text));
            }
            args.text
        }
        SearchCmd::Clear => {
            prefs.set_search("");
            if mode == OutputMode::Human {
                print_success("Search cleared");
            }
            String::new()
        }
        SearchCmd::Show => {
            let text = prefs.search();
            if mode == OutputMode::Human {
                if text.is_empty() {
                    theme::print_dim("No search set.");
                } else {
                    theme::print_kv("Search", &text);
                }
            }
            text
        }
    };

    if mode == OutputMode::Json {
        print_json(&serde_json::json!({ "search": text }))?;
    }

    Ok(())
}
