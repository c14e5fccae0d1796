use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PROMPT: &str = "> ";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Tasks a `--demo` session starts with.
pub const DEMO_TASKS: [&str; 3] = ["Buy groceries", "Walk the dog", "Finish homework"];

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Tasks added when the session starts.
    #[serde(default)]
    pub seed: Vec<String>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: default_log_level(),
            session: SessionConfig::default(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            prompt: default_prompt(),
            seed: Vec::new(),
        }
    }
}

impl Config {
    /// Loads the TOML file at `path`, if it exists, then applies `TASK_CLI__*`
    /// environment overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let s = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("TASK_CLI")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("session.seed")
                    .try_parsing(true),
            )
            .build()?;

        Ok(s.try_deserialize()?)
    }
}
