use crate::output::{print_json, theme, OutputMode};
use serde::Serialize;

#[derive(Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    arch: &'static str,
    os: &'static str,
}

pub fn execute(mode: OutputMode) {
    let info = VersionInfo {
        name: "rulescope",
        version: env!("CARGO_PKG_VERSION"),
        arch: std::env::consts::ARCH,
        os: std::env::consts::OS,
    };

    match mode {
        OutputMode::Json => {
            let _ = print_json(&info);
        }
        OutputMode::Human => {
            theme::print_header(info.name);
            theme::print_kv("Version", info.version);
            theme::print_kv("Arch", info.arch);
            theme::print_kv("OS", info.os);
            println!();
        }
    }
}
