use crate::core::models::application::{ApplicationId, ApplicationInsert, ApplicationRow, ApplicationStatus, Query};
use crate::error::Error;

/// Storage port for the `applications` table.
pub trait ApplicationCommon {
    /// Inserts one row and returns it as stored, with `id` and `created_at` assigned.
    async fn insert(&self, data: ApplicationInsert) -> Result<ApplicationRow, Error>;
    /// Rows matching `query`, newest `created_at` first.
    async fn query(&self, query: &Query) -> Result<Vec<ApplicationRow>, Error>;
    /// `None` when no row has this id.
    async fn update_status(&self, id: ApplicationId, status: ApplicationStatus) -> Result<Option<ApplicationRow>, Error>;
    /// Number of rows removed; zero is not an error.
    async fn delete(&self, id: ApplicationId) -> Result<u64, Error>;
}
