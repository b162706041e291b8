use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod notify;

#[derive(Parser)]
#[command(name = "souschef", version, about = "Souschef cooking-mode CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cooking session control
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Step timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Follow a running timer until it completes
    Watch,
    /// Extract a duration from instruction text
    Extract {
        /// Instruction text to scan
        text: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Session { action } => commands::session::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Watch => commands::watch::run(),
        Commands::Extract { text } => commands::extract::run(&text),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "souschef", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
