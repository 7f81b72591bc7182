use colored::{ColoredString, Colorize};
use rulescope_common::RuleState;

pub fn print_header(title: &str) {
    let width = title.chars().count() + 6;
    let border = "─".repeat(width);
    println!();
    println!("  ╭{}╮", border.cyan());
    println!("  │   {}   │", title.bright_cyan().bold());
    println!("  ╰{}╯", border.cyan());
    println!();
}

pub fn print_section(title: &str) {
    println!();
    println!("  {} {}", "●".bright_cyan(), title.bold());
    println!("  {}", "─".repeat(40).dimmed());
}

pub fn print_kv(label: &str, value: &str) {
    println!(
        "    {} {}",
        format!("{:<16}", label).dimmed(),
        value.bright_white()
    );
}

pub fn print_kv_colored(label: &str, value: &str, ok: bool) {
    let styled = if ok {
        value.green().to_string()
    } else {
        value.red().to_string()
    };
    println!("    {} {}", format!("{:<16}", label).dimmed(), styled);
}

pub fn print_dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

pub fn state_label(state: RuleState) -> ColoredString {
    badge(state, None)
}

/// `firing (3)` style label, colored by severity.
pub fn badge(state: RuleState, count: Option<usize>) -> ColoredString {
    let text = match count {
        Some(n) => format!("{state} ({n})"),
        None => state.to_string(),
    };
    match state {
        RuleState::Firing => text.red().bold(),
        RuleState::Pending => text.yellow().bold(),
        RuleState::Inactive => text.green(),
    }
}

pub fn checkbox(checked: bool) -> ColoredString {
    if checked {
        "[x]".bright_cyan().bold()
    } else {
        "[ ]".dimmed()
    }
}
