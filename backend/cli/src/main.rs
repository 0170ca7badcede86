mod config_cmd;
mod io;
mod prompt_cmd;
mod render_cmd;
mod terminal_output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use armonia_config::{config_dir, config_file_path, load_and_prepare, validate};
use armonia_logging::{init_logger, LogSettings};

use prompt_cmd::PromptArgs;
use render_cmd::RenderArgs;

#[derive(Parser)]
#[command(name = "armonia")]
#[command(about = "Armonia — render chat replies to HTML and fill system prompts")]
#[command(version)]
struct Cli {
    /// Config file (default: $ARMONIA_CONFIG_DIR/config.yaml or ~/.armonia/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (RUST_LOG still wins)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown to an HTML fragment
    Render(RenderArgs),
    /// Extract the reply from a model result JSON and render it
    Reply(RenderArgs),
    /// Fill a system prompt template
    Prompt(PromptArgs),
    /// Show the effective configuration
    Config {
        /// List the ${VAR} names the config file refers to instead
        #[arg(long)]
        show_vars: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| config_file_path(&config_dir()));

    if let Commands::Config { show_vars: true } = cli.command {
        return config_cmd::run_show_vars(&config_path).await;
    }

    let config = load_and_prepare(&config_path).await?;

    init_logger(&LogSettings {
        level: cli
            .log_level
            .clone()
            .unwrap_or_else(|| config.log_level().to_string()),
        directory: config.log_directory().map(PathBuf::from),
        json: config.log_json(),
    })?;
    debug!(path = %config_path.display(), "Using config");
    for warning in validate(&config).warnings {
        warn!(path = %warning.path, message = %warning.message, "Config warning");
    }

    match cli.command {
        Commands::Render(args) => render_cmd::run_render(args, &config).await?,
        Commands::Reply(args) => render_cmd::run_reply(args, &config).await?,
        Commands::Prompt(args) => prompt_cmd::run(args, &config).await?,
        Commands::Config { .. } => config_cmd::run(&config, &config_path).await?,
    }

    Ok(())
}
