use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Runtime configuration, read from the environment after `.env` is loaded.
#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_pool_size")]
    pub db_pool_size: u32,
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_owned()
}

fn default_pool_size() -> u32 {
    10
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }
}
