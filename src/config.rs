use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub household: HouseholdConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub planning: PlanningConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HouseholdConfig {
    pub id: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// JSON document holding recipes and week plans
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "mealplanner.json".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanningConfig {
    /// IANA name used to decide what "today" is
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_cache_capacity() -> usize {
    mealplanner_mealplan::DEFAULT_CACHE_CAPACITY
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALPLANNER__HOUSEHOLD__ID, etc.)
    /// 2. Config file specified by path, `CONFIG_PATH` or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("household.id", "default")?
            .set_default("store.path", default_store_path())?
            .set_default("planning.timezone", default_timezone())?
            .set_default("planning.cache_capacity", default_cache_capacity() as u64)?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALPLANNER")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.household.id.trim().is_empty() {
            return Err("Household id must not be empty".to_string());
        }
        if self.household.id.contains('/') {
            return Err("Household id must not contain '/'".to_string());
        }
        if self.store.path.trim().is_empty() {
            return Err("Store path must not be empty".to_string());
        }
        if self.planning.cache_capacity < 1 {
            return Err("Planning cache_capacity must be at least 1".to_string());
        }
        Ok(())
    }
}
