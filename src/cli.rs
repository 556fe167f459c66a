//! CLI argument parsing
//!
//! `stitch` takes no subcommands: it always builds once, and `--watch`
//! keeps it running afterwards.

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Stitch - assemble src/index.html and its partials into dist/index.html
#[derive(Parser, Debug)]
#[command(name = "stitch")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Partials are pulled in with <!-- include:path/from/src --> markers in src/index.html."
)]
pub struct Cli {
    /// Rebuild whenever a file under src/ changes
    #[arg(short, long)]
    pub watch: bool,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Color output: auto, always, never
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args_builds_once() {
        let cli = Cli::try_parse_from(["stitch"]).unwrap();
        assert!(!cli.watch);
        assert!(!cli.json);
        assert_eq!(cli.color, None);
    }

    #[test]
    fn test_cli_parse_watch_long() {
        let cli = Cli::try_parse_from(["stitch", "--watch"]).unwrap();
        assert!(cli.watch);
    }

    #[test]
    fn test_cli_parse_watch_short() {
        let cli = Cli::try_parse_from(["stitch", "-w"]).unwrap();
        assert!(cli.watch);
    }

    #[test]
    fn test_cli_flags_order_independent() {
        let cli = Cli::try_parse_from(["stitch", "--json", "-w"]).unwrap();
        assert!(cli.watch && cli.json);

        let cli = Cli::try_parse_from(["stitch", "-w", "--json"]).unwrap();
        assert!(cli.watch && cli.json);
    }

    #[test]
    fn test_cli_watch_takes_no_value() {
        assert!(Cli::try_parse_from(["stitch", "--watch=src"]).is_err());
    }

    #[test]
    fn test_cli_color_never() {
        let cli = Cli::try_parse_from(["stitch", "--color", "never"]).unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
    }

    #[test]
    fn test_cli_rejects_positional_args() {
        assert!(Cli::try_parse_from(["stitch", "src/index.html"]).is_err());
    }
}
