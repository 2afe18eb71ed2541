mod app;
mod config;
mod controller;
mod launcher;

use anyhow::{Context, Result};
use clap::Parser;

use app::ControllerApp;
use config::CONFIG;
use launcher::Launcher;

/// Small window with buttons to open and close a fullscreen black screen.
#[derive(Parser, Debug)]
#[command(name = "controller", version)]
struct Args {
    /// Show the black screen on monitor INDEX instead of the controller UI.
    #[arg(
        long,
        value_name = "INDEX",
        num_args = 0..=1,
        allow_negative_numbers = true
    )]
    child: Option<Option<i64>>,
}

fn main() -> Result<()> {
    libs::util::load_env();
    libs::util::init_tracing();

    let args = Args::parse();
    if let Some(index) = args.child {
        return display::cover_monitor(index.unwrap_or(CONFIG.default_monitor));
    }

    let launcher = Launcher::from_config(&CONFIG).context("resolve child executable")?;
    tracing::info!(mode = ?launcher.mode(), "controller starting");

    app::run(ControllerApp::new(
        launcher,
        CONFIG.default_monitor,
        CONFIG.terminate_grace(),
        CONFIG.poll_interval(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flag_runs_the_ui() {
        let args = Args::try_parse_from(["controller"]).unwrap();
        assert_eq!(args.child, None);
    }

    #[test]
    fn child_flag_with_index() {
        let args = Args::try_parse_from(["controller", launcher::CHILD_FLAG, "2"]).unwrap();
        assert_eq!(args.child, Some(Some(2)));
    }

    #[test]
    fn child_flag_without_index_uses_default() {
        let args = Args::try_parse_from(["controller", "--child"]).unwrap();
        assert_eq!(args.child, Some(None));
    }

    #[test]
    fn child_flag_matches_launcher_command() {
        let launcher = Launcher::new("controller", launcher::LaunchMode::ChildFlag);
        let cmd = launcher.command(3);
        let argv = std::iter::once("controller".to_string()).chain(cmd.args().iter().cloned());
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.child, Some(Some(3)));
    }
}
