use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use rulescope_common::RuleState;

pub fn build_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(cells);
    table
}

pub fn state_cell(state: RuleState) -> Cell {
    let cell = Cell::new(state.as_str());
    match state {
        RuleState::Firing => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        RuleState::Pending => cell.fg(Color::Yellow).add_attribute(Attribute::Bold),
        RuleState::Inactive => cell.fg(Color::Green),
    }
}
