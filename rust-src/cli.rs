//! CLI definitions using clap.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::commands;


/// secdash - cybersecurity executive dashboard for the terminal
#[derive(Parser)]
#[command(name = "secdash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with dataset overrides keyed by view name
    #[arg(long, global = true, env = "SECDASH_DATA")]
    data: Option<PathBuf>,

    /// Restrict navigation to these views, in this order (comma-separated)
    #[arg(long, global = true, value_delimiter = ',')]
    views: Vec<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// List the dashboard views in navigation order
    List,

    /// Print a rendered view
    Show {
        /// View name (default: the first view)
        view: Option<String>,

        /// Print every view
        #[arg(long, conflicts_with = "view")]
        all: bool,

        /// Print the rendered output as JSON
        #[arg(long)]
        json: bool,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// Render every view and report dataset problems
    Check,

    /// Export a view as PNG or SVG
    Export {
        /// View name (default: the first view)
        view: Option<String>,

        /// Export as SVG instead of PNG
        #[arg(long)]
        svg: bool,

        /// Open file after export
        #[arg(long)]
        open: bool,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Launch the interactive dashboard
    Tui,
}


fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}


/// Install the stderr subscriber. `RUST_LOG` wins over the flags.
fn init_logging(level: Level) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("secdash={}", level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(log_level(cli.verbose, cli.quiet))?;

    let Some(command) = cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    let dashboard = commands::load_dashboard(cli.data.as_deref(), &cli.views)?;
    let is_terminal = std::io::stdout().is_terminal();

    match command {
        Commands::List => commands::list::run(&dashboard),
        Commands::Show { view, all, json, no_color } => {
            commands::show::run(&dashboard, view.as_deref(), all, json, !no_color && is_terminal)
        }
        Commands::Check => commands::check::run(&dashboard, is_terminal),
        Commands::Export { view, svg, open, output } => {
            commands::export::run(&dashboard, view.as_deref(), svg, open, output)
        }
        Commands::Tui => commands::tui::run(&dashboard),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0, false), Level::WARN);
        assert_eq!(log_level(2, false), Level::DEBUG);
        assert_eq!(log_level(9, false), Level::TRACE);
        assert_eq!(log_level(0, true), Level::ERROR);
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["secdash", "show", "Incidents", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Show { view, all, json, no_color }) => {
                assert_eq!(view.as_deref(), Some("Incidents"));
                assert!(json && !all && !no_color);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_parse_views_list() {
        let args = ["secdash", "tui", "--views", "Dashboard,Incidents"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.views, vec!["Dashboard", "Incidents"]);
    }

    #[test]
    fn test_show_all_conflicts_with_view() {
        assert!(Cli::try_parse_from(["secdash", "show", "Incidents", "--all"]).is_err());
    }
}
