use anyhow::Result;
use clap::Args;
use rulescope_common::{RuleState, StatsCount};
use rulescope_engine::{FilterEngine, StateFilter};

use super::helpers;
use crate::output::render::{self, RenderOptions};
use crate::output::{disable_color, print_json, print_warning, spinner, OutputMode};

#[derive(Args)]
pub struct ShowArgs {
    #[arg(long, help = "Search rule names for this run only")]
    pub(crate) search: Option<String>,
    #[arg(long, help = "Show annotations and alerts for this run only")]
    pub(crate) annotations: bool,
    #[arg(
        long = "state",
        value_delimiter = ',',
        help = "Show only these states for this run (firing,pending,inactive)"
    )]
    pub(crate) states: Vec<RuleState>,
}

pub async fn execute(
    args: ShowArgs,
    mode: OutputMode,
    source: Option<String>,
    prefs_path: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let cfg = helpers::load_optional_config(config_path.as_deref())?;
    let source = helpers::resolve_source(source.as_deref(), cfg.as_ref())?;
    let timeout = helpers::resolve_timeout(cfg.as_ref());
    let display = cfg.as_ref().map(|c| c.display.clone()).unwrap_or_default();
    if !display.color {
        disable_color();
    }

    let sp = match mode {
        OutputMode::Human => Some(spinner::create("Loading rules...")),
        OutputMode::Json => None,
    };

    let decoded = match helpers::load_groups(&source, timeout).await {
        Ok(d) => d,
        Err(e) => {
            if let Some(sp) = &sp {
                spinner::finish_err(sp, "Could not load rules");
            }
            return Err(e);
        }
    };

    if let Some(sp) = sp {
        spinner::finish_clear(&sp);
    }

    let prefs = helpers::open_preferences(prefs_path.as_deref(), config_path.as_deref())?;
    let mut state = prefs.load();
    if let Some(search) = args.search {
        state.search = search;
    }
    if args.annotations {
        state.show_annotations = true;
    }
    if !args.states.is_empty() {
        state.filter = args
            .states
            .iter()
            .fold(StateFilter::new(false, false, false), |f, s| f.with(*s, true));
    }

    let stats = StatsCount::from_groups(&decoded.groups);
    let view = FilterEngine::new(&decoded.groups, stats).render(&state);

    match mode {
        OutputMode::Json => print_json(&view)?,
        OutputMode::Human => {
            let report = decoded.report;
            if !report.is_clean() {
                print_warning(&format!(
                    "Skipped {} malformed group(s), {} rule(s), {} alert(s)",
                    report.skipped_groups, report.skipped_rules, report.skipped_alerts
                ));
            }
            render::print_view(
                &view,
                &RenderOptions {
                    max_alerts_per_rule: display.max_alerts_per_rule,
                },
            );
        }
    }

    Ok(())
}
