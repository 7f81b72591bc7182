#[cfg(test)]
mod tests {
    use crate::cmd::filter::FilterCmd;
    use crate::cmd::Commands;
    use crate::Opts;
    use clap::Parser;
    use rulescope_common::RuleState;

    fn parse(args: &[&str]) -> Opts {
        let mut full = vec!["rulescope"];
        full.extend_from_slice(args);
        Opts::parse_from(full)
    }

    fn try_parse(args: &[&str]) -> Result<Opts, clap::Error> {
        let mut full = vec!["rulescope"];
        full.extend_from_slice(args);
        Opts::try_parse_from(full)
    }

    #[test]
    fn parse_version() {
        let opts = parse(&["version"]);
        assert!(matches!(opts.cmd, Commands::Version));
    }

    #[test]
    fn parse_json_flag() {
        let opts = parse(&["--json", "version"]);
        assert!(opts.json);
        assert_eq!(opts.output_mode(), crate::output::OutputMode::Json);
    }

    #[test]
    fn parse_human_flag_default() {
        let opts = parse(&["version"]);
        assert!(!opts.json);
        assert_eq!(opts.output_mode(), crate::output::OutputMode::Human);
    }

    #[test]
    fn parse_source_flag() {
        let opts = parse(&["--source", "http://prom:9090/api/v1/rules", "show"]);
        assert_eq!(opts.source.as_deref(), Some("http://prom:9090/api/v1/rules"));
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let opts = parse(&["show", "--prefs", "/tmp/prefs.json", "--json"]);
        assert!(opts.json);
        assert_eq!(opts.prefs.as_deref(), Some("/tmp/prefs.json"));
    }

    #[test]
    fn parse_config_flag() {
        let opts = parse(&["--config", "/tmp/rulescope.yml", "config", "show"]);
        assert_eq!(opts.config.as_deref(), Some("/tmp/rulescope.yml"));
        assert!(matches!(opts.cmd, Commands::Config(_)));
    }

    #[test]
    fn parse_show_defaults() {
        let opts = parse(&["show"]);
        match opts.cmd {
            Commands::Show(args) => {
                assert!(args.search.is_none());
                assert!(!args.annotations);
                assert!(args.states.is_empty());
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn parse_show_overrides() {
        let opts = parse(&[
            "show",
            "--search",
            "disk",
            "--annotations",
            "--state",
            "firing,Pending",
        ]);
        match opts.cmd {
            Commands::Show(args) => {
                assert_eq!(args.search.as_deref(), Some("disk"));
                assert!(args.annotations);
                assert_eq!(args.states, vec![RuleState::Firing, RuleState::Pending]);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn parse_show_rejects_unknown_state() {
        assert!(try_parse(&["show", "--state", "resolved"]).is_err());
    }

    #[test]
    fn parse_filter_toggle_with_state() {
        let opts = parse(&["filter", "toggle", "inactive"]);
        match opts.cmd {
            Commands::Filter(FilterCmd::Toggle(args)) => {
                assert_eq!(args.state, Some(RuleState::Inactive));
            }
            _ => panic!("expected filter toggle"),
        }
    }

    #[test]
    fn parse_filter_toggle_without_state() {
        let opts = parse(&["filter", "toggle"]);
        match opts.cmd {
            Commands::Filter(FilterCmd::Toggle(args)) => assert!(args.state.is_none()),
            _ => panic!("expected filter toggle"),
        }
    }

    #[test]
    fn parse_filter_only() {
        let opts = parse(&["filter", "only", "firing"]);
        match opts.cmd {
            Commands::Filter(FilterCmd::Only(args)) => assert_eq!(args.state, RuleState::Firing),
            _ => panic!("expected filter only"),
        }
    }

    #[test]
    fn parse_filter_only_requires_state() {
        assert!(try_parse(&["filter", "only"]).is_err());
    }

    #[test]
    fn parse_search_set() {
        let opts = parse(&["search", "set", "node load"]);
        assert!(matches!(opts.cmd, Commands::Search(_)));
    }

    #[test]
    fn parse_search_clear() {
        let opts = parse(&["search", "clear"]);
        assert!(matches!(opts.cmd, Commands::Search(_)));
    }

    #[test]
    fn parse_annotations_toggle() {
        let opts = parse(&["annotations", "toggle"]);
        assert!(matches!(opts.cmd, Commands::Annotations(_)));
    }

    #[test]
    fn parse_prefs_reset_yes() {
        let opts = parse(&["prefs", "reset", "--yes"]);
        assert!(matches!(opts.cmd, Commands::Prefs(_)));
    }

    #[test]
    fn parse_config_path() {
        let opts = parse(&["config", "path"]);
        assert!(matches!(opts.cmd, Commands::Config(_)));
    }

    #[test]
    fn parse_unknown_command_fails() {
        assert!(try_parse(&["alerts", "list"]).is_err());
    }
}
