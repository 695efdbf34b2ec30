use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rustyline::DefaultEditor;
use tracing::info;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::Session;
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Session-scoped terminal expense tracker",
    long_about = "Track expenses for the length of one session: add, edit, delete, \
                  sort and filter them, and watch the running total and per-category \
                  summary. Nothing is saved when the session ends."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Shell,

    /// Run a file of session commands as one session
    Run {
        /// Path to the command script
        script: PathBuf,
    },

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&settings);
    info!(config = %paths.settings_file().display(), "Configuration loaded");

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();

            if stdin.is_terminal() {
                println!("Expense tracker. Type 'help' for commands, 'quit' to leave.");
                let mut editor = DefaultEditor::new().context("Failed to start line editor")?;
                Session::new(&settings).run_interactive(&mut editor, &mut stdout)?;
            } else {
                Session::new(&settings).run(stdin.lock(), &mut stdout)?;
            }
        }
        Commands::Run { script } => {
            let file = File::open(&script)
                .with_context(|| format!("Failed to open script {}", script.display()))?;

            let mut stdout = io::stdout();
            Session::new(&settings).run(BufReader::new(file), &mut stdout)?;
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Log level:           {}", settings.log_level);
            println!("  Prompt:              {:?}", settings.prompt);
            println!("  Render after change: {}", settings.render_after_change);
            println!("  Name column width:   {}", settings.name_width);
        }
    }

    Ok(())
}
