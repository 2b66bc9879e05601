use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// Connection string for the papers database. Queries are only executed when set.
    #[config(env = "PAPERQL_DATABASE_URL")]
    pub database_url: Option<String>,
    #[config(env = "PAPERQL_MAX_CONNECTIONS", default = 5)]
    pub max_connections: u32,
    /// Number of compiled queries kept by `PaperSearch`.
    #[config(env = "PAPERQL_CACHE_CAPACITY", default = 1024)]
    pub cache_capacity: u64,
    #[cfg(test)]
    #[config(env = "PAPERQL_CONTAINER_RAMDISKED", default = true)]
    pub container_ramdisked: bool,
    #[cfg(test)]
    #[config(env = "PAPERQL_CONTAINER_LOGS", default = false)]
    pub container_logs: bool,
}

impl Config {
    /// Load a fresh configuration from the current environment.
    pub fn from_env() -> Result<Self> {
        Ok(Config::builder().env().load()?)
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::from_env()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}
