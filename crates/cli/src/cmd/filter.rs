use anyhow::Result;
use clap::Subcommand;
use rulescope_common::RuleState;
use rulescope_engine::StateFilter;

use super::helpers;
use crate::output::{print_json, print_success, prompt, render, theme, OutputMode};

#[derive(Subcommand)]
pub enum FilterCmd {
    Show,
    Toggle(ToggleArgs),
    Only(OnlyArgs),
    Reset,
}

#[derive(clap::Args)]
pub struct ToggleArgs {
    #[arg(help = "State to show or hide (prompted when omitted)")]
    pub(crate) state: Option<RuleState>,
}

#[derive(clap::Args)]
pub struct OnlyArgs {
    #[arg(help = "The one state to keep visible")]
    pub(crate) state: RuleState,
}

pub async fn execute(
    cmd: FilterCmd,
    mode: OutputMode,
    prefs_path: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let prefs = helpers::open_preferences(prefs_path.as_deref(), config_path.as_deref())?;

    let filter = match cmd {
        FilterCmd::Show => prefs.state_filter(),
        FilterCmd::Toggle(args) => {
            let state = match args.state {
                Some(s) => s,
                None => {
                    let current = prefs.state_filter();
                    match prompt::select_state("State to toggle", &current) {
                        Some(s) => s,
                        None => {
                            theme::print_dim("Cancelled.");
                            return Ok(());
                        }
                    }
                }
            };
            let next = prefs.toggle_state(state);
            if mode == OutputMode::Human {
                let verb = if next.visible(state) { "shown" } else { "hidden" };
                print_success(&format!("{state} rules are now {verb}"));
            }
            next
        }
        FilterCmd::Only(args) => {
            let next = StateFilter::only(args.state);
            prefs.set_state_filter(next);
            if mode == OutputMode::Human {
                print_success(&format!("Showing only {} rules", args.state));
            }
            next
        }
        FilterCmd::Reset => {
            let next = StateFilter::default();
            prefs.set_state_filter(next);
            if mode == OutputMode::Human {
                print_success("All states shown");
            }
            next
        }
    };

    match mode {
        OutputMode::Json => print_json(&filter)?,
        OutputMode::Human => print_filter(&filter),
    }

    Ok(())
}

fn print_filter(filter: &StateFilter) {
    println!();
    for state in RuleState::ALL {
        println!(
            "  {} {}",
            theme::checkbox(filter.visible(state)),
            theme::state_label(state)
        );
    }
    println!();
    theme::print_kv("Visible", &render::visible_list(filter));
    if !filter.any_visible() {
        println!();
        theme::print_dim("Every state is hidden; no groups will be shown.");
    }
    println!();
}
