use anyhow::Result;
use clap::{Parser, Subcommand};

use track_cli::cli::{handle_categories_command, handle_summary_command, SummaryArgs};
use track_cli::config::logging;
use track_cli::config::{paths::TrackPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "track",
    version,
    about = "Terminal personal finance tracker",
    long_about = "track records income and expense transactions, keeps a running \
                  balance, warns when spending goes over your budget and exports \
                  the ledger as CSV. Run without a subcommand to open the TUI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Record transactions non-interactively and print the totals
    Summary(SummaryArgs),

    /// List the available transaction categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            paths.ensure_directories()?;
            logging::init_file(&paths.log_file(), &settings.log_level)?;
            track_cli::tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Summary(args)) => {
            logging::init_stderr("warn");
            handle_summary_command(&settings, args)?;
        }
        Some(Commands::Categories) => {
            handle_categories_command();
        }
        Some(Commands::Config) => {
            println!("track Configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Theme:           {:?}", settings.theme);
            println!("  Export path:     {}", settings.export_path().display());
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}
