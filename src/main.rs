use anyhow::Result;
use clap::{Parser, Subcommand};

use money_tracker::cli::{
    handle_chart_command, handle_dashboard_command, handle_expense_command, ChartCommands,
    ExpenseCommands,
};
use money_tracker::config::{paths::TrackerPaths, settings::Settings};
use money_tracker::display::format_audit_entries;
use money_tracker::log::init_logging;
use money_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "moneytracker",
    version,
    about = "Track recurring and one-time expenses",
    long_about = "Money Tracker records what you pay and how often, and shows what \
                  that costs you per month, per category and per day."
)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show monthly totals and the expense list
    Dashboard {
        /// Any date in the month to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Cycle filter: all, monthly, yearly or one-time
        #[arg(short = 'y', long)]
        cycle: Option<String>,
        /// Category label to filter the list by
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Spending charts
    #[command(subcommand)]
    Chart(ChartCommands),

    /// Show recent changes
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(cli.verbose || settings.verbose_logging);

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Dashboard {
            date,
            cycle,
            category,
        }) => {
            handle_dashboard_command(
                &storage,
                &settings,
                date.as_deref(),
                cycle.as_deref(),
                category.as_deref(),
            )?;
        }
        Some(Commands::Chart(cmd)) => {
            handle_chart_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            let entries = storage.audit().read_recent(limit)?;
            println!("{}", format_audit_entries(&entries));
        }
        Some(Commands::Config) => {
            println!("Money Tracker Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Verbose logging: {}", settings.verbose_logging);
        }
        None => {
            println!("Money Tracker - recurring expense tracker");
            println!();
            println!("Run 'moneytracker --help' for usage information.");
        }
    }

    Ok(())
}
