#[cfg(test)]
pub mod memory;
pub mod pg;
pub mod rest;

use log::{info, warn};

use crate::config::Config;
use crate::core::models::application::{ApplicationId, ApplicationInsert, ApplicationRow, ApplicationStatus, Query};
use crate::core::ports::repository::ApplicationCommon;
use crate::error::Error;

use self::pg::PgStore;
use self::rest::RestStore;

/// The backing store chosen at startup.
pub enum Store {
    Rest(RestStore),
    Postgres(PgStore),
}

impl Store {
    /// `DATABASE_URL` wins over the REST credentials. `None` means nothing is configured.
    pub async fn from_config(config: &Config) -> Result<Option<Self>, Error> {
        if let Some(url) = &config.database_url {
            info!("using postgres store");
            return Ok(Some(Store::Postgres(PgStore::connect(url).await?)));
        }
        match (&config.store.url, &config.store.key) {
            (Some(url), Some(key)) if config.store.is_configured() => {
                info!("using REST store at {}", url);
                Ok(Some(Store::Rest(RestStore::new(url, key)?)))
            }
            _ => {
                warn!("store is not configured, application management is disabled");
                Ok(None)
            }
        }
    }
}

impl ApplicationCommon for Store {
    async fn insert(&self, data: ApplicationInsert) -> Result<ApplicationRow, Error> {
        match self {
            Store::Rest(s) => s.insert(data).await,
            Store::Postgres(s) => s.insert(data).await,
        }
    }

    async fn query(&self, query: &Query) -> Result<Vec<ApplicationRow>, Error> {
        match self {
            Store::Rest(s) => s.query(query).await,
            Store::Postgres(s) => s.query(query).await,
        }
    }

    async fn update_status(&self, id: ApplicationId, status: ApplicationStatus) -> Result<Option<ApplicationRow>, Error> {
        match self {
            Store::Rest(s) => s.update_status(id, status).await,
            Store::Postgres(s) => s.update_status(id, status).await,
        }
    }

    async fn delete(&self, id: ApplicationId) -> Result<u64, Error> {
        match self {
            Store::Rest(s) => s.delete(id).await,
            Store::Postgres(s) => s.delete(id).await,
        }
    }
}
