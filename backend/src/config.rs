//! Runtime settings, read from the environment with logged defaults.

use std::{env, fmt::Display, str::FromStr};

use log::{info, warn};

pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite file holding the document collection.
    pub db_path: String,
    pub collection: String,
    /// Insert the sample athletes when the collection is empty.
    pub seed: bool,
    pub open_browser: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: try_load("PLANTILLA_HOST", "127.0.0.1".to_string()),
            port: try_load("PLANTILLA_PORT", 8080),
            db_path: try_load("PLANTILLA_DB", "plantilla.sqlite".to_string()),
            collection: try_load("PLANTILLA_COLLECTION", "Snowboard".to_string()),
            seed: try_load("PLANTILLA_SEED", true),
            open_browser: try_load("PLANTILLA_OPEN_BROWSER", false),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
