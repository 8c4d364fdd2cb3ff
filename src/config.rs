use crate::domains::simulation::SessionConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `ALIFE__SERVER__BASE_URL`.
pub const ENV_PREFIX: &str = "ALIFE";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub canvas: CanvasConfig,
    pub session: SessionConfig,
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Directory receiving one PNG per presented frame.
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub frames_per_second: u32,
    /// Consecutive poll failures tolerated before the loop gives up.
    pub max_poll_retries: u32,
    pub max_frames: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: String,
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Defaults, then the TOML file if it exists, then `ALIFE__*` variables.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.logging.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8443".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            output_dir: None,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            frames_per_second: 60,
            max_poll_retries: 0,
            max_frames: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::simulation::WorldDynamics;
    use std::io::Write;

    #[tokio::test]
    async fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
base_url = "http://sim.local:9000"

[session]
num_agents = 3
world = "Extreme"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server.base_url, "http://sim.local:9000");
        assert_eq!(config.server.request_timeout_ms, 30_000);
        assert_eq!(config.session.num_agents, 3);
        assert_eq!(config.session.world, WorldDynamics::Extreme);
        assert_eq!(config.session.bonded_agents, "[]");
        assert_eq!(config.canvas.width, 500);
        assert_eq!(config.client.frames_per_second, 60);
    }

    #[test]
    fn from_file_reports_missing_file() {
        assert!(tokio_test::block_on(Config::from_file("does-not-exist.toml")).is_err());
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let config = Config::load("does-not-exist.toml").unwrap();
        assert_eq!(config.session, SessionConfig::default());
        assert_eq!(config.client.max_poll_retries, 0);
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
