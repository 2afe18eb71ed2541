use anyhow::Result;
use clap::Parser;

use display::config::CONFIG;

/// Cover one monitor with a borderless black window. ESC closes it.
#[derive(Parser, Debug)]
#[command(name = "display", version)]
struct Args {
    /// Zero-based monitor index (0 = primary). Unknown indices fall back to the primary.
    #[arg(allow_negative_numbers = true)]
    index: Option<i64>,

    /// List the detected monitors and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    libs::util::load_env();
    libs::util::init_tracing();

    let args = Args::parse();
    if args.list {
        return display::print_monitors();
    }

    display::cover_monitor(args.index.unwrap_or(CONFIG.default_monitor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_optional() {
        let args = Args::try_parse_from(["display"]).unwrap();
        assert_eq!(args.index, None);
        assert!(!args.list);
    }

    #[test]
    fn negative_index_is_accepted() {
        let args = Args::try_parse_from(["display", "-1"]).unwrap();
        assert_eq!(args.index, Some(-1));
    }

    #[test]
    fn non_numeric_index_is_rejected() {
        assert!(Args::try_parse_from(["display", "second"]).is_err());
    }
}
