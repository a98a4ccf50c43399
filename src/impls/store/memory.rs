use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};

use crate::core::models::application::{ApplicationId, ApplicationInsert, ApplicationRow, ApplicationStatus, Query};
use crate::core::ports::repository::ApplicationCommon;
use crate::error::Error;

/// In-process stand-in for the `applications` table, used by handler and service tests.
#[derive(Clone, Default)]
pub struct MemoryStore {
    rows: Arc<Mutex<Vec<ApplicationRow>>>,
}

impl MemoryStore {
    pub fn rows(&self) -> Vec<ApplicationRow> {
        self.rows.lock().unwrap().clone()
    }
}

impl ApplicationCommon for MemoryStore {
    async fn insert(&self, data: ApplicationInsert) -> Result<ApplicationRow, Error> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|r| r.id.0).max().unwrap_or(0) + 1;
        // keep created_at strictly increasing so ordering is deterministic
        let created_at = match rows.iter().map(|r| r.created_at).max() {
            Some(last) if last >= Utc::now() => last + Duration::milliseconds(1),
            _ => Utc::now(),
        };
        let row = ApplicationRow {
            id: ApplicationId(id),
            first_name: Some(data.first_name),
            last_name: Some(data.last_name),
            email: Some(data.email),
            phone: Some(data.phone),
            age: Some(data.age),
            education: Some(data.education.into()),
            experience: Some(data.experience),
            motivation: Some(data.motivation),
            skills: Some(data.skills),
            availability: Some(data.availability),
            address: Some(data.address),
            emergency_contact: Some(data.emergency_contact),
            emergency_phone: Some(data.emergency_phone),
            type_: data.type_,
            status: data.status,
            created_at,
            updated_at: None,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn query(&self, query: &Query) -> Result<Vec<ApplicationRow>, Error> {
        let mut rows: Vec<ApplicationRow> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| query.type_eq.map_or(true, |t| r.type_ == t))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn update_status(&self, id: ApplicationId, status: ApplicationStatus) -> Result<Option<ApplicationRow>, Error> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|r| r.id == id).map(|r| {
            r.status = status;
            r.updated_at = Some(Utc::now().max(r.created_at));
            r.clone()
        }))
    }

    async fn delete(&self, id: ApplicationId) -> Result<u64, Error> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok((before - rows.len()) as u64)
    }
}
