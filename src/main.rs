use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster::{demo, Registry, RegistryConfig};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "In-memory registry of students, instructors, courses and enrollments")]
struct Cli {
    /// Read configuration from this JSON file instead of the user config directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Cascade student and course removals into rosters and enrollments
    #[arg(long, global = true)]
    cascade: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the demonstration scenario
    Demo {
        /// Print the final registry contents as JSON instead of the transcript
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config,
}

/// Initialize tracing with output to stderr so stdout only carries results
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "roster=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<RegistryConfig> {
    let config = match &cli.config {
        Some(path) => RegistryConfig::from_path(path)?,
        None => RegistryConfig::load(),
    };
    let mut config = config.apply_env()?;
    if cli.cascade {
        config.cascade_removals = true;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Some(Commands::Config) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Some(Commands::Demo { json: true }) => {
            let mut registry = Registry::with_config(config);
            demo::run(&mut registry, &mut std::io::sink())?;
            println!("{}", serde_json::to_string_pretty(&registry.snapshot())?);
        }
        Some(Commands::Demo { json: false }) | None => {
            let mut registry = Registry::with_config(config);
            let stdout = std::io::stdout();
            demo::run(&mut registry, &mut stdout.lock())?;
        }
    }

    Ok(())
}
