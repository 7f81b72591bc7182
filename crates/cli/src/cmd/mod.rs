mod annotations;
mod config;
pub(crate) mod filter;
pub(crate) mod helpers;
mod prefs;
mod search;
pub(crate) mod show;
mod version;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Show(show::ShowArgs),
    #[command(subcommand)]
    Filter(filter::FilterCmd),
    #[command(subcommand)]
    Search(search::SearchCmd),
    #[command(subcommand)]
    Annotations(annotations::AnnotationsCmd),
    #[command(subcommand)]
    Prefs(prefs::PrefsCmd),
    #[command(subcommand)]
    Config(config::ConfigCmd),
    Version,
}

pub async fn run(opts: crate::Opts) -> Result<()> {
    let mode = opts.output_mode();
    match opts.cmd {
        Commands::Show(args) => {
            show::execute(args, mode, opts.source, opts.prefs, opts.config).await
        }
        Commands::Filter(cmd) => filter::execute(cmd, mode, opts.prefs, opts.config).await,
        Commands::Search(cmd) => search::execute(cmd, mode, opts.prefs, opts.config).await,
        Commands::Annotations(cmd) => {
            annotations::execute(cmd, mode, opts.prefs, opts.config).await
        }
        Commands::Prefs(cmd) => prefs::execute(cmd, mode, opts.prefs, opts.config).await,
        Commands::Config(cmd) => config::execute(cmd, mode, opts.config).await,
        Commands::Version => {
            version::execute(mode);
            Ok(())
        }
    }
}
