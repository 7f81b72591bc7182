use colored::Colorize;
use comfy_table::{Cell, Table};
use rulescope_common::{Labels, Rule, RuleState, StatsCount};
use rulescope_engine::{FilterState, FuzzyMatcher, GroupCounts, GroupView, RulesView, StateFilter};
use std::path::Path;

use super::table::{build_table, state_cell};
use super::theme;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub max_alerts_per_rule: usize,
}

pub fn print_view(view: &RulesView<'_>, opts: &RenderOptions) {
    theme::print_header("Alerting Rules");
    println!("  {}", toggle_line(view));
    println!("  {}", summary_line(&view.stats));
    if !view.search.is_empty() {
        theme::print_kv("Search", &view.search);
    }

    if view.is_empty() {
        println!();
        theme::print_dim("No rules match the current filters.");
        println!();
        return;
    }

    let matcher = FuzzyMatcher::new(&view.search);
    for group in &view.groups {
        print_group(group, &matcher, view.show_annotations, opts);
    }
    println!();
}

/// State checkboxes with rule totals, then the annotations checkbox.
pub fn toggle_line(view: &RulesView<'_>) -> String {
    let mut parts: Vec<String> = view
        .stats
        .iter()
        .map(|(state, count)| {
            format!(
                "{} {}",
                theme::checkbox(view.filter.visible(state)),
                theme::badge(state, Some(*count))
            )
        })
        .collect();
    parts.push(format!(
        "{} annotations",
        theme::checkbox(view.show_annotations)
    ));
    parts.join("   ")
}

/// Rule total, colored by the most severe state present.
pub fn summary_line(stats: &StatsCount) -> String {
    let total = format!("{} rule(s)", stats.total());
    match stats.worst() {
        Some(state) => format!("{}, worst: {}", total, theme::state_label(state)),
        None => total,
    }
}

/// Comma-separated visible states, or `none`.
pub fn visible_list(filter: &StateFilter) -> String {
    let states = filter.visible_states();
    if states.is_empty() {
        return "none".to_string();
    }
    states
        .iter()
        .map(RuleState::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn group_title(group: &GroupView<'_>) -> String {
    let g = group.group;
    if g.file.is_empty() {
        g.name.clone()
    } else {
        format!("{} > {}", g.file, g.name)
    }
}

pub fn badge_line(counts: &GroupCounts) -> String {
    let mut badges = Vec::new();
    if counts.firing > 0 {
        badges.push(theme::badge(RuleState::Firing, Some(counts.firing)).to_string());
    }
    if counts.pending > 0 {
        badges.push(theme::badge(RuleState::Pending, Some(counts.pending)).to_string());
    }
    if counts.has_inactive {
        badges.push(theme::state_label(RuleState::Inactive).to_string());
    }
    badges.join("  ")
}

fn print_group(group: &GroupView<'_>, matcher: &FuzzyMatcher, show_annotations: bool, opts: &RenderOptions) {
    theme::print_section(&group_title(group));
    let badges = badge_line(&group.counts);
    if !badges.is_empty() {
        println!("    {badges}");
    }
    if group.group.interval > 0.0 {
        theme::print_kv("Interval", &format!("{}s", group.group.interval));
    }
    println!("{}", rules_table(&group.rendered_rules, matcher));

    let hidden = group.hidden_rules();
    if hidden > 0 {
        theme::print_dim(&format!("{hidden} matching rule(s) hidden by the state filter"));
    }

    if show_annotations {
        for rule in &group.rendered_rules {
            print_rule_details(rule, opts);
        }
    }
}

pub fn rules_table(rules: &[&Rule], matcher: &FuzzyMatcher) -> Table {
    let mut table = build_table(&["Name", "State", "Alerts", "For", "Query"]);
    for rule in rules {
        table.add_row(vec![
            Cell::new(highlight(&rule.name, matcher)),
            state_cell(rule.state),
            Cell::new(rule.alert_count()),
            Cell::new(format_duration(rule.duration)),
            Cell::new(&rule.query),
        ]);
    }
    table
}

fn print_rule_details(rule: &Rule, opts: &RenderOptions) {
    println!();
    println!("    {} {}", "▸".bright_cyan(), rule.name.bold());
    for (key, value) in &rule.annotations {
        theme::print_kv(key, value);
    }
    if let Some(err) = &rule.last_error {
        theme::print_kv_colored("Last error", err, false);
    }
    if !rule.alerts.is_empty() && opts.max_alerts_per_rule > 0 {
        println!("{}", alerts_table(rule, opts.max_alerts_per_rule));
    }
}

pub fn alerts_table(rule: &Rule, max: usize) -> Table {
    let mut table = build_table(&["Labels", "State", "Active Since", "Value"]);
    for alert in rule.alerts.iter().take(max) {
        table.add_row(vec![
            Cell::new(format_labels(&alert.labels)),
            state_cell(alert.state),
            Cell::new(&alert.active_at),
            Cell::new(&alert.value),
        ]);
    }
    let rest = rule.alerts.len().saturating_sub(max);
    if rest > 0 {
        table.add_row(vec![Cell::new(format!("… {rest} more"))]);
    }
    table
}

/// Bolds the characters of `name` that the current search matched.
pub fn highlight(name: &str, matcher: &FuzzyMatcher) -> String {
    let positions = match matcher.score(name) {
        Some(m) if !m.positions.is_empty() => m.positions,
        _ => return name.to_string(),
    };

    let mut out = String::with_capacity(name.len());
    let mut next = positions.iter().peekable();
    for (i, c) in name.chars().enumerate() {
        if next.peek() == Some(&&i) {
            next.next();
            out.push_str(&c.to_string().bold().underline().to_string());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn format_labels(labels: &Labels) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{k}={v:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_duration(secs: f64) -> String {
    let secs = secs.max(0.0).round() as u64;
    if secs == 0 {
        "-".to_string()
    } else if secs % 3600 == 0 {
        format!("{}h", secs / 3600)
    } else if secs % 60 == 0 {
        format!("{}m", secs / 60)
    } else {
        format!("{secs}s")
    }
}

pub fn print_preferences(state: &FilterState, path: &Path) {
    theme::print_header("View Preferences");

    theme::print_section("State filter");
    theme::print_kv("Visible", &visible_list(&state.filter));
    for s in RuleState::ALL {
        let shown = state.filter.visible(s);
        theme::print_kv_colored(s.as_str(), if shown { "shown" } else { "hidden" }, shown);
    }

    theme::print_section("Search");
    let search = if state.search.is_empty() {
        "<none>"
    } else {
        state.search.as_str()
    };
    theme::print_kv("Text", search);

    theme::print_section("Annotations");
    theme::print_kv_colored(
        "Show",
        if state.show_annotations { "on" } else { "off" },
        state.show_annotations,
    );

    theme::print_section("Storage");
    theme::print_kv("File", &path.display().to_string());
    println!();
}
