use anyhow::Result;
use clap::{Parser, Subcommand};

use wallet_tui::config::{paths::WalletPaths, settings::Settings};
use wallet_tui::ledger::{seed, summarize};

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "Terminal wallet dashboard",
    long_about = "wallet-tui renders a small financial dashboard in the terminal: \
                  balance and income/expense summaries, a transaction list, and a \
                  light/dark theme that follows your terminal or a config setting."
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

    /// Print the ledger summary to stdout
    Summary,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = WalletPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            wallet_tui::tui::run_tui(&settings)?;
        }
        Commands::Summary => {
            init_tracing();
            print_summary(&settings);
        }
        Commands::Config => {
            init_tracing();
            println!("wallet-tui Configuration");
            println!("========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Theme:    {:?}", settings.theme);
            println!("  Currency: {}", settings.currency_symbol);
            println!("  Greeting: {}", settings.greeting_name);
        }
    }

    Ok(())
}

/// Set up stderr logging for the non-TUI subcommands
///
/// The TUI path skips this: a subscriber writing to stderr would scribble
/// over the alternate screen.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Print the income/expense totals for the seed ledger
fn print_summary(settings: &Settings) {
    let transactions = seed::transactions();
    let summary = summarize(transactions);
    let symbol = &settings.currency_symbol;

    println!("Ledger summary ({} transactions)", transactions.len());
    println!("  Income:   {}", summary.income_total.format_with_symbol(symbol));
    println!("  Expenses: {}", summary.expense_total.format_with_symbol(symbol));
}
