use log::{info, warn};
use rand::{distributions::Alphanumeric, thread_rng, Rng};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

const PLACEHOLDER_URL: &str = "your_supabase_project_url_here";
const PLACEHOLDER_KEY: &str = "your_supabase_anon_key_here";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub url: Option<String>,
    pub key: Option<String>,
}

impl StoreConfig {
    /// Both values present and neither left at the template placeholder.
    pub fn is_configured(&self) -> bool {
        match (&self.url, &self.key) {
            (Some(url), Some(key)) => url != PLACEHOLDER_URL && key != PLACEHOLDER_KEY,
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub database_url: Option<String>,
    pub admin_password: String,
    pub jwt_secret: String,
    pub bind_address: String,
    pub port: u16,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |keys: &[&str]| keys.iter().find_map(|k| lookup(*k).filter(|v| !v.trim().is_empty()));
        let admin_password = var(&["ADMIN_PASSWORD", "VITE_ADMIN_PASSWORD"]).unwrap_or_else(|| {
            warn!("ADMIN_PASSWORD not set, falling back to the default password");
            DEFAULT_ADMIN_PASSWORD.to_owned()
        });
        let jwt_secret = var(&["JWT_SECRET"]).unwrap_or_else(|| {
            warn!("JWT_SECRET not set, admin sessions will not survive a restart");
            random_secret()
        });
        Ok(Self {
            store: StoreConfig {
                url: var(&["SUPABASE_URL", "VITE_SUPABASE_URL"]),
                key: var(&["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"]),
            },
            database_url: var(&["DATABASE_URL"]),
            admin_password,
            jwt_secret,
            bind_address: try_load("BIND_ADDRESS", var(&["BIND_ADDRESS"]), "0.0.0.0")?,
            port: try_load("PORT", var(&["PORT"]), "8000")?,
        })
    }
}

fn try_load<T: FromStr>(key: &str, value: Option<String>, default: &str) -> Result<T, Error>
where
    T::Err: Display,
{
    value
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| Error::Configuration(format!("invalid {key} value: {e}")))
}

fn random_secret() -> String {
    thread_rng().sample_iter(&Alphanumeric).take(32).map(char::from).collect()
}
