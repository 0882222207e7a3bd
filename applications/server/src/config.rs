/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_dataset")]
    pub dataset: DatasetSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub access_token: String,
}

impl ServerConfig {
    /// Load configuration from file and environment.
    ///
    /// With no explicit path, `config.toml` in the working directory is used
    /// if present. `USERSEARCH_`-prefixed variables override file values,
    /// with `__` between section and key (`USERSEARCH_AUTH__ACCESS_TOKEN`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("USERSEARCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.access_token.is_empty() {
            return Err(ServerError::Config(
                "Access token is required (set USERSEARCH_AUTH__ACCESS_TOKEN)".to_string(),
            ));
        }

        if !self.dataset.path.exists() {
            return Err(ServerError::Config(format!(
                "Dataset not found at {:?}",
                self.dataset.path
            )));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dataset() -> DatasetSettings {
    DatasetSettings {
        path: default_dataset_path(),
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("./data/dataset.xml")
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        access_token: String::new(),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            dataset: default_dataset(),
            auth: default_auth(),
        }
    }
}
