//! Handles settings for the application.
//!
//! Values come from built-in defaults, then an optional `settings.toml` in the
//! working directory, then `EXPENSES_*` environment variables (`__` separates
//! nested keys, e.g. `EXPENSES_SERVER__PORT`).
use config::{Config, ConfigError, Environment, File, FileFormat, FileSourceFile};
use serde::Deserialize;

pub const DEFAULT_DATA_FILE: &str = "expenses.json";

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    /// Backing JSON file, `EXPENSES_DATA_FILE`.
    pub data_file: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_sources(
            File::with_name("settings").required(false),
            environment(),
        )
    }

    fn from_sources(
        file: File<FileSourceFile, FileFormat>,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let mut settings: Settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("data_file", DEFAULT_DATA_FILE)?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        if settings.data_file.trim().is_empty() {
            settings.data_file = DEFAULT_DATA_FILE.to_string();
        }

        Ok(settings)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("EXPENSES")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
