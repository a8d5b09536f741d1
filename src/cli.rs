//! Command-line interface.

use clap::Parser;

use crate::config::{Environment, Settings};

#[derive(Parser, Debug)]
#[command(name = "postpulse")]
#[command(about = "Social post sentiment and engagement analysis service")]
#[command(version)]
pub struct Cli {
    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Deployment mode (dev or prod)
    #[arg(long = "env", env = "APP_ENV", value_enum, ignore_case = true, default_value_t = Environment::Prod)]
    pub environment: Environment,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "postpulse=debug,tower_http=debug"
        } else if self.environment.is_dev() {
            "postpulse=info"
        } else {
            "postpulse=warn"
        }
    }

    /// Load settings and run the server until it exits.
    pub async fn run(self) -> anyhow::Result<()> {
        let settings = Settings::from_env(self.environment)?;
        tracing::info!(
            "Starting in {:?} mode with model {}",
            self.environment,
            settings.gemini.model
        );
        crate::server::serve(settings, &self.host, self.port).await
    }
}
