//! CLI Adapter.

mod clean;
mod console;
mod init_config;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::AppContext;
use crate::app::commands::{self, CommandOutcome};
use crate::domain::{AppError, CpdCommand};
use crate::ports::OPERATOR_LEVEL;
use crate::services::{DEFAULT_CONFIG_PATH, HttpProfileLookup, StdioHost, load_config};

#[derive(Parser)]
#[command(name = "cpd")]
#[command(version)]
#[command(
    about = "Clear stored player data from a Minecraft server world",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Path to config.yml (the bundled default is written there if missing)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Server working directory (overrides `working_directory` in config.yml)
    #[arg(short = 'w', long, global = true)]
    working_dir: Option<PathBuf>,
    /// Permission level of the command source
    #[arg(long, global = true, default_value_t = OPERATOR_LEVEL)]
    permission_level: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Clear data of the player with this UUID
    #[clap(visible_alias = "u")]
    Uuid {
        /// Player UUID (dashed form)
        uuid: String,
    },
    /// Clear data of the named player
    #[clap(visible_alias = "p")]
    Playerid {
        /// Player name
        name: String,
    },
    /// Clear player data not modified for this many days
    Clean {
        /// Age threshold in days
        days: u32,
        /// Run the clean instead of only proposing it
        #[arg(long)]
        confirm: bool,
    },
    /// Read `!!cpd` commands from stdin, one per line
    Console,
    /// Write the default config.yml if it does not exist
    InitConfig,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::InitConfig => init_config::run_init_config(&cli.global.config).map(|_| 0),
        command => run_command(&cli.global, command),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_command(global: &GlobalArgs, command: Commands) -> Result<i32, AppError> {
    let ctx = build_context(global)?;
    let mut host = StdioHost::new(global.permission_level);

    let outcome = match command {
        Commands::Uuid { uuid } => commands::dispatch(&ctx, &mut host, CpdCommand::Uuid(uuid)),
        Commands::Playerid { name } => {
            commands::dispatch(&ctx, &mut host, CpdCommand::PlayerId(name))
        }
        Commands::Clean { days, confirm } => clean::run_clean(&ctx, &mut host, days, confirm)?,
        Commands::Console => return console::run_console(&ctx, &mut host).map(|_| 0),
        Commands::InitConfig => CommandOutcome::Completed,
    };

    Ok(outcome.exit_code())
}

fn build_context(global: &GlobalArgs) -> Result<AppContext<HttpProfileLookup>, AppError> {
    let mut config = load_config(&global.config)?;
    if let Some(working_dir) = &global.working_dir {
        config = config.with_working_directory(working_dir);
    }
    let lookup = HttpProfileLookup::new(config.online_api.clone())?;
    Ok(AppContext::new(config, lookup))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cpd=info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
