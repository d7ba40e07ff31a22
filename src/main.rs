use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod assets;
mod handle_stub;
mod stub;

use handle_stub::handle_stub_command;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubCommands {
    /// Write src/demo.cc, overwriting any previous contents
    Generate,
    /// Verify that src/demo.cc matches the generated contents
    Check,
    /// Print the stub without writing it
    Show {
        /// Print a JSON summary instead of the file contents
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser)]
#[command(name = "gendemo")]
#[command(version)]
#[command(about = "Generate the src/demo.cc include stub")]
struct Cli {
    /// Directory that contains src/ (defaults to the current directory)
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<StubCommands>,
}

fn init_tracing(debug: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if debug {
        filter = filter.add_directive(tracing::Level::DEBUG.into());
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!(root = %cli.root.display(), "starting gendemo");

    // No subcommand behaves like `generate`
    let command = cli.command.unwrap_or(StubCommands::Generate);
    handle_stub_command(command, &cli.root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["gendemo"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gendemo", "check", "--root", "/tmp/x", "--debug"]).unwrap();
        assert_eq!(cli.command, Some(StubCommands::Check));
        assert_eq!(cli.root, PathBuf::from("/tmp/x"));
        assert!(cli.debug);
    }

    #[test]
    fn test_show_json_flag() {
        let cli = Cli::try_parse_from(["gendemo", "show", "--json"]).unwrap();
        assert_eq!(cli.command, Some(StubCommands::Show { json: true }));
    }
}
