mod noninteractive;
mod output;
mod repl;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trackbot_assistant::Assistant;
use trackbot_core::config::{AnalyticsMode, AppConfig};
use trackbot_store::SessionStore;

#[derive(Parser, Debug)]
#[command(name = "trackbot", version, about = "Package-tracking chat assistant for the terminal")]
struct Cli {
    /// Non-interactive mode: answer one message and exit
    #[arg(short, long)]
    prompt: Option<String>,

    /// Directory holding a local trackbot.json
    #[arg(short = 'c', long = "cwd")]
    working_dir: Option<PathBuf>,

    /// Output format for non-interactive mode
    #[arg(short = 'f', long, default_value = "text")]
    output_format: OutputFormat,

    /// Analytics provider (overrides config)
    #[arg(short, long)]
    analytics: Option<AnalyticsArg>,

    /// Seed for placeholder analytics (overrides config)
    #[arg(long, env = "TRACKBOT_SEED")]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum AnalyticsArg {
    Placeholder,
    Route,
}

impl From<AnalyticsArg> for AnalyticsMode {
    fn from(arg: AnalyticsArg) -> Self {
        match arg {
            AnalyticsArg::Placeholder => AnalyticsMode::Placeholder,
            AnalyticsArg::Route => AnalyticsMode::Route,
        }
    }
}

pub struct App {
    pub assistant: Assistant,
    pub session: SessionStore,
    pub config: AppConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let filter = if cli.debug || config.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let app = build_app(config)?;

    if let Some(prompt) = cli.prompt {
        noninteractive::run(app, prompt, cli.output_format)
    } else {
        repl::run(app)
    }
}

/// File and env config with command-line flags applied last.
fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = trackbot_core::config::load_config(cli.working_dir.clone())
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    if let Some(mode) = cli.analytics {
        config.analytics = mode.into();
    }
    if cli.seed.is_some() {
        config.rng_seed = cli.seed;
    }
    Ok(config)
}

fn build_app(config: AppConfig) -> Result<App> {
    let session = SessionStore::with_demo_data().map_err(|e| anyhow::anyhow!("{e}"))?;
    let assistant = Assistant::from_config(&config);
    tracing::debug!(
        session_id = session.id(),
        analytics = assistant.analytics_provider(),
        working_dir = %config.working_dir.display(),
        "app ready"
    );

    Ok(App {
        assistant,
        session,
        config,
    })
}
