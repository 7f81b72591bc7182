use anyhow::Result;
use clap::Subcommand;

use super::helpers;
use crate::output::{print_error, print_json, print_success, theme, OutputMode};

#[derive(Subcommand)]
pub enum ConfigCmd {
    Show,
    Validate,
    Path,
}

pub async fn execute(cmd: ConfigCmd, mode: OutputMode, config_path: Option<String>) -> Result<()> {
    match cmd {
        ConfigCmd::Show => show(mode, config_path),
        ConfigCmd::Validate => validate(mode, config_path),
        ConfigCmd::Path => path(mode, config_path),
    }
}

fn show(mode: OutputMode, config_path: Option<String>) -> Result<()> {
    let cfg = helpers::load_config(config_path.as_deref())?;
    let prefs = helpers::resolve_prefs_path(None, Some(&cfg));

    match mode {
        OutputMode::Json => print_json(&cfg)?,
        OutputMode::Human => {
            theme::print_header("Configuration");

            theme::print_section("Source");
            theme::print_kv("Rules", &cfg.source);
            let kind = if helpers::is_remote(&cfg.source) { "http" } else { "file" };
            theme::print_kv("Kind", kind);
            theme::print_kv("Timeout", &format!("{}s", cfg.timeout_seconds));

            theme::print_section("Preferences");
            theme::print_kv("File", &prefs.display().to_string());

            theme::print_section("Display");
            theme::print_kv(
                "Max alerts/rule",
                &cfg.display.max_alerts_per_rule.to_string(),
            );
            theme::print_kv_colored(
                "Color",
                &cfg.display.color.to_string(),
                cfg.display.color,
            );
            println!();
        }
    }

    Ok(())
}

fn validate(mode: OutputMode, config_path: Option<String>) -> Result<()> {
    match helpers::load_config(config_path.as_deref()) {
        Ok(_cfg) => match mode {
            OutputMode::Json => {
                print_json(&serde_json::json!({"valid": true}))?;
            }
            OutputMode::Human => print_success("Configuration is valid"),
        },
        Err(e) => match mode {
            OutputMode::Json => {
                print_json(&serde_json::json!({"valid": false, "error": format!("{e:#}")}))?;
            }
            OutputMode::Human => print_error(&format!("Invalid configuration: {e:#}")),
        },
    }

    Ok(())
}

fn path(mode: OutputMode, config_path: Option<String>) -> Result<()> {
    let p = config_path
        .map(std::path::PathBuf::from)
        .unwrap_or_else(helpers::default_config_path);

    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "path": p.display().to_string(),
            "exists": p.exists(),
        }))?,
        OutputMode::Human => println!("{}", p.display()),
    }
    Ok(())
}
