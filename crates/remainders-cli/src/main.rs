use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "remainders-cli", version, about = "Remainders CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Item management
    Item {
        #[command(subcommand)]
        action: commands::item::ItemAction,
    },
    /// Countdown priority order
    Order {
        #[command(subcommand)]
        action: commands::order::OrderAction,
    },
    /// Render progress cards
    View {
        #[command(subcommand)]
        action: commands::view::ViewAction,
    },
    /// Backup and restore
    Backup {
        #[command(subcommand)]
        action: commands::backup::BackupAction,
    },
    /// Display settings
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Item { action } => commands::item::run(action),
        Commands::Order { action } => commands::order::run(action),
        Commands::View { action } => commands::view::run(action),
        Commands::Backup { action } => commands::backup::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
