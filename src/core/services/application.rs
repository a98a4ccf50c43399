use log::debug;

use crate::core::models::application::{Application, ApplicationId, ApplicationStatus, ApplicationType, Query, Submission};
use crate::core::ports::repository::ApplicationCommon;
use crate::core::transform::{submission_to_storage, to_presentation};
use crate::error::Error;

pub const NOT_CONFIGURED: &str = "Database is not configured. Please set up your database credentials.";

/// Record store client. Every operation refuses to run while no store is configured.
pub struct Applications<R> {
    repository: Option<R>,
}

impl<R> From<Option<R>> for Applications<R> {
    fn from(repository: Option<R>) -> Self {
        Self { repository }
    }
}

impl<R> Applications<R>
where
    R: ApplicationCommon,
{
    pub fn new(repository: R) -> Self {
        Self { repository: Some(repository) }
    }

    pub fn unconfigured() -> Self {
        Self { repository: None }
    }

    pub fn is_configured(&self) -> bool {
        self.repository.is_some()
    }

    fn repository(&self) -> Result<&R, Error> {
        self.repository.as_ref().ok_or_else(|| Error::Configuration(NOT_CONFIGURED.into()))
    }

    pub async fn create(&self, submission: Submission) -> Result<Application, Error> {
        let repository = self.repository()?;
        let insert = submission_to_storage(submission)?;
        let row = repository.insert(insert).await?;
        debug!("created {} application {}", row.type_.as_str(), row.id);
        Ok(to_presentation(row))
    }

    pub async fn list_all(&self) -> Result<Vec<Application>, Error> {
        let rows = self.repository()?.query(&Query::default()).await?;
        Ok(rows.into_iter().map(to_presentation).collect())
    }

    pub async fn list_by_type(&self, type_: ApplicationType) -> Result<Vec<Application>, Error> {
        let rows = self.repository()?.query(&Query { type_eq: Some(type_) }).await?;
        Ok(rows.into_iter().map(to_presentation).collect())
    }

    pub async fn update_status(&self, id: ApplicationId, status: ApplicationStatus) -> Result<Application, Error> {
        match self.repository()?.update_status(id, status).await? {
            Some(row) => {
                debug!("application {} is now {}", id, status.as_str());
                Ok(to_presentation(row))
            }
            None => Err(Error::NotFound(format!("application {id} not found"))),
        }
    }

    /// Succeeds whether or not `id` existed.
    pub async fn delete(&self, id: ApplicationId) -> Result<bool, Error> {
        let deleted = self.repository()?.delete(id).await?;
        debug!("deleted application {} ({} row(s))", id, deleted);
        Ok(true)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::application::AgeInput;
    use crate::core::transform::test::submission;
    use crate::impls::store::memory::MemoryStore;

    #[actix_web::test]
    async fn test_unconfigured_refuses_every_operation() {
        let applications = Applications::<MemoryStore>::unconfigured();
        assert!(!applications.is_configured());
        assert!(matches!(applications.list_all().await, Err(Error::Configuration(_))));
        assert!(matches!(applications.list_by_type(ApplicationType::Intern).await, Err(Error::Configuration(_))));
        assert!(matches!(applications.create(submission("intern")).await, Err(Error::Configuration(_))));
        assert!(matches!(
            applications.update_status(ApplicationId(1), ApplicationStatus::Approved).await,
            Err(Error::Configuration(_))
        ));
        assert!(matches!(applications.delete(ApplicationId(1)).await, Err(Error::Configuration(_))));
    }

    #[actix_web::test]
    async fn test_unconfigured_checks_before_validation() {
        let applications = Applications::<MemoryStore>::unconfigured();
        assert!(matches!(applications.create(Submission::default()).await, Err(Error::Configuration(_))));
    }

    #[actix_web::test]
    async fn test_create_forces_pending() {
        let applications = Applications::new(MemoryStore::default());
        let mut s = submission("intern");
        s.age = Some(AgeInput::Number(25));
        let created = applications.create(s).await.unwrap();
        assert_eq!(created.status, ApplicationStatus::Pending);
        assert_eq!(created.type_, ApplicationType::Intern);
        assert_eq!(created.age, Some(25));
        assert_eq!(created.updated_at, None);
    }

    #[actix_web::test]
    async fn test_create_rejects_invalid_submission() {
        let store = MemoryStore::default();
        let applications = Applications::new(store.clone());
        let mut s = submission("volunteer");
        s.age = Some(AgeInput::Text("abc".into()));
        assert!(matches!(applications.create(s).await, Err(Error::Validation(_))));
        assert!(store.rows().is_empty());
    }

    #[actix_web::test]
    async fn test_listing_is_newest_first() {
        let applications = Applications::new(MemoryStore::default());
        let a = applications.create(submission("intern")).await.unwrap();
        let b = applications.create(submission("volunteer")).await.unwrap();
        let c = applications.create(submission("intern")).await.unwrap();

        let all: Vec<_> = applications.list_all().await.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(all, vec![c.id, b.id, a.id]);

        let interns: Vec<_> = applications.list_by_type(ApplicationType::Intern).await.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(interns, vec![c.id, a.id]);
    }

    #[actix_web::test]
    async fn test_update_status_touches_only_status() {
        let applications = Applications::new(MemoryStore::default());
        let created = applications.create(submission("volunteer")).await.unwrap();
        let updated = applications.update_status(created.id, ApplicationStatus::Approved).await.unwrap();

        assert_eq!(updated.status, ApplicationStatus::Approved);
        let updated_at = updated.updated_at.expect("store sets updated_at");
        assert!(updated_at >= updated.created_at);
        assert_eq!(
            Application {
                status: created.status,
                updated_at: None,
                ..updated
            },
            created
        );
    }

    #[actix_web::test]
    async fn test_update_unknown_id_is_not_found() {
        let applications = Applications::new(MemoryStore::default());
        assert!(matches!(
            applications.update_status(ApplicationId(999), ApplicationStatus::Rejected).await,
            Err(Error::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_delete_unknown_id_succeeds() {
        let applications = Applications::new(MemoryStore::default());
        let created = applications.create(submission("intern")).await.unwrap();
        assert!(applications.delete(ApplicationId(999)).await.unwrap());
        assert_eq!(applications.list_all().await.unwrap().len(), 1);
        assert!(applications.delete(created.id).await.unwrap());
        assert!(applications.list_all().await.unwrap().is_empty());
    }
}
