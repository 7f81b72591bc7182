use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use rulescope_common::RuleState;
use rulescope_engine::StateFilter;

/// Prompts for one state; entries show whether the state is currently shown.
pub fn select_state(prompt: &str, current: &StateFilter) -> Option<RuleState> {
    let items: Vec<String> = RuleState::ALL
        .iter()
        .map(|s| {
            let mark = if current.visible(*s) { "shown" } else { "hidden" };
            format!("{s} ({mark})")
        })
        .collect();

    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()
        .ok()
        .flatten()
        .map(|i| RuleState::ALL[i])
}

/// Yes/no prompt defaulting to no. A closed terminal counts as no.
pub fn confirm(msg: &str) -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(msg)
        .default(false)
        .interact()
        .unwrap_or(false)
}
