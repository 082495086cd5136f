//! Lanai Trie - self-check harness.
//!
//! Builds tries from configured scenarios and checks every query answer.
//! Any mismatch fails the whole run with a non-zero exit status.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use lanai_trie_lib::config::{ConfigLoader, ConfigResult, LanaiConfig, LogConfig, ENV_PREFIX};
use lanai_trie_lib::error::{
    ErrorContext, ErrorReporter, LanaiError, LanaiResult, TracingErrorReporter,
};
use lanai_trie_lib::harness;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Lanai Trie harness.
#[derive(Parser, Debug)]
#[command(name = "lanai_trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the configured scenarios (the default)
    Check {
        /// Print scenario reports as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[arg(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to stderr so reports own stdout.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed
        .map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Returns the loaded configuration or reports the failure and exits.
fn config_or_exit(loaded: ConfigResult<LanaiConfig>, reporter: &dyn ErrorReporter) -> LanaiConfig {
    match loaded {
        Ok(config) => config,
        Err(e) => {
            reporter.report(&ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> LanaiResult<()> {
    let args = Args::parse();
    let reporter = TracingErrorReporter;

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = loader.load();
    let log = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    init_logging(&log)?;

    match args.command.unwrap_or(Command::Check { json: false }) {
        Command::Check { json } => {
            let config = config_or_exit(loaded, &reporter);
            match harness::run_all(&config) {
                Ok(reports) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&reports)?);
                    }
                    info!(scenarios = reports.len(), "all scenarios passed");
                    Ok(())
                }
                Err(e) => {
                    reporter.report(
                        &ErrorContext::new(e.into(), "harness")
                            .with_details(format!("child map: {}", config.trie.child_map)),
                    );
                    process::exit(1);
                }
            }
        }
        Command::Validate => {
            let config = config_or_exit(loaded, &reporter);
            info!(
                scenarios = config.effective_scenarios().len(),
                "Configuration validated successfully"
            );
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LanaiConfig::with_reference_suite();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
