#[cfg(test)]
mod tests {
    use crate::output::{build_table, print_json, state_cell, theme, OutputMode};
    use rulescope_common::RuleState;

    #[test]
    fn output_mode_json() {
        let mode = OutputMode::Json;
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn output_mode_human() {
        let mode = OutputMode::Human;
        assert_eq!(mode, OutputMode::Human);
    }

    #[test]
    fn print_json_valid() {
        let val = serde_json::json!({"key": "value"});
        assert!(print_json(&val).is_ok());
    }

    #[test]
    fn build_table_creates_headers() {
        let table = build_table(&["Name", "State", "Alerts"]);
        let rendered = table.to_string();
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("State"));
        assert!(rendered.contains("Alerts"));
    }

    #[test]
    fn build_table_with_state_cells() {
        let mut table = build_table(&["Name", "State"]);
        table.add_row(vec![comfy_table::Cell::new("HighCPU"), state_cell(RuleState::Firing)]);
        table.add_row(vec![comfy_table::Cell::new("LowDisk"), state_cell(RuleState::Pending)]);
        let rendered = table.to_string();
        assert!(rendered.contains("HighCPU"));
        assert!(rendered.contains("firing"));
        assert!(rendered.contains("pending"));
    }

    #[test]
    fn badge_includes_count() {
        let badge = theme::badge(RuleState::Firing, Some(3));
        assert!(badge.to_string().contains("firing (3)"));
        assert!(theme::state_label(RuleState::Inactive)
            .to_string()
            .contains("inactive"));
    }

    #[test]
    fn checkbox_marks() {
        assert!(theme::checkbox(true).to_string().contains("[x]"));
        assert!(theme::checkbox(false).to_string().contains("[ ]"));
    }
}
