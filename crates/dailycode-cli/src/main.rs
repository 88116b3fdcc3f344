use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use dailycode_core::GeneratorConfig;

use commands::config::ConfigAction;

mod commands;

#[derive(Parser)]
#[command(name = "dailycode", version, about = "Generate one small Python program per day")]
struct Cli {
    /// Path to a TOML configuration file (default: ./dailycode.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output directory, overriding the configured one
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate today's file and append it to the index (default)
    Generate(commands::generate::GenerateArgs),
    /// List available templates
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which template and parameters a date maps to
    Show(commands::show::ShowArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(
    path: Option<&std::path::Path>,
    root: Option<PathBuf>,
) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    let mut config = GeneratorConfig::load_or_default(path)?;
    if let Some(root) = root {
        config.output_dir = root;
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        None => load_config(config_path, cli.root).and_then(|config| {
            commands::generate::run(commands::generate::GenerateArgs::default(), config)
        }),
        Some(Commands::Generate(args)) => load_config(config_path, cli.root)
            .and_then(|config| commands::generate::run(args, config)),
        Some(Commands::List { json }) => commands::list::run(json),
        Some(Commands::Show(args)) => commands::show::run(args),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => {
                load_config(config_path, cli.root).and_then(commands::config::show)
            }
            ConfigAction::Init { force } => commands::config::init(config_path, force),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
