use rulescope_common::{decode_groups, RuleState, StatsCount};
use rulescope_engine::{FileStore, FilterEngine, FilterState, Preferences, StateFilter};

const FIXTURE: &str = include_str!("fixtures/rules.json");

fn group_names(view: &rulescope_engine::RulesView<'_>) -> Vec<String> {
    view.groups.iter().map(|g| g.group.name.clone()).collect()
}

#[test]
fn fixture_decodes_cleanly() {
    let decoded = decode_groups(FIXTURE).unwrap();
    assert_eq!(decoded.groups.len(), 3);
    assert_eq!(decoded.report.recording_rules, 1);
    assert!(decoded.report.is_clean());

    let stats = StatsCount::from_groups(&decoded.groups);
    assert_eq!(stats.firing, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.inactive, 2);
}

#[test]
fn default_view_drops_empty_group() {
    let decoded = decode_groups(FIXTURE).unwrap();
    let stats = StatsCount::from_groups(&decoded.groups);
    let view = FilterEngine::new(&decoded.groups, stats).render(&FilterState::default());

    assert_eq!(group_names(&view), vec!["node.rules", "blackbox.rules"]);
    let node = &view.groups[0];
    assert_eq!(node.counts.firing, 2);
    assert_eq!(node.counts.pending, 1);
    assert!(!node.counts.has_inactive);
    assert!(view.groups[1].counts.has_inactive);
    assert_eq!(view.rendered_rule_count(), 4);
}

#[test]
fn hiding_inactive_removes_blackbox_group() {
    let decoded = decode_groups(FIXTURE).unwrap();
    let stats = StatsCount::from_groups(&decoded.groups);
    let state = FilterState {
        filter: StateFilter::default().toggle(RuleState::Inactive),
        ..FilterState::default()
    };
    let view = FilterEngine::new(&decoded.groups, stats).render(&state);

    assert_eq!(group_names(&view), vec!["node.rules"]);
    assert_eq!(view.stats, stats);
}

#[test]
fn search_narrows_and_recounts() {
    let decoded = decode_groups(FIXTURE).unwrap();
    let stats = StatsCount::from_groups(&decoded.groups);
    let state = FilterState {
        search: "disk".into(),
        ..FilterState::default()
    };
    let view = FilterEngine::new(&decoded.groups, stats).render(&state);

    assert_eq!(group_names(&view), vec!["node.rules"]);
    let node = &view.groups[0];
    assert_eq!(node.rendered_rules.len(), 1);
    assert_eq!(node.rendered_rules[0].name, "LowDisk");
    assert_eq!(node.counts.firing, 0);
    assert_eq!(node.counts.pending, 1);
}

#[test]
fn preferences_survive_sessions_and_drive_view() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    {
        let prefs = Preferences::new(FileStore::new(&path));
        prefs.toggle_state(RuleState::Firing);
        prefs.set_search("down");
        prefs.set_show_annotations(true);
    }

    let prefs = Preferences::new(FileStore::new(&path));
    let state = prefs.load();
    assert!(!state.filter.visible(RuleState::Firing));
    assert_eq!(state.search, "down");
    assert!(state.show_annotations);

    let decoded = decode_groups(FIXTURE).unwrap();
    let stats = StatsCount::from_groups(&decoded.groups);
    let view = FilterEngine::new(&decoded.groups, stats).render(&state);
    assert_eq!(group_names(&view), vec!["blackbox.rules"]);
    assert_eq!(view.groups[0].rendered_rules[0].name, "EndpointDown");
    assert!(view.show_annotations);
}
