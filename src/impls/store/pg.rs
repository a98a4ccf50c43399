use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{query, query_as, FromRow, PgPool, Postgres, QueryBuilder};

use crate::core::models::application::{ApplicationId, ApplicationInsert, ApplicationRow, ApplicationStatus, Query, StoredEducation};
use crate::core::ports::repository::ApplicationCommon;
use crate::error::Error;

/// Direct SQL access to the `applications` table.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

#[derive(FromRow)]
struct Record {
    id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    age: Option<i32>,
    education: Option<String>,
    experience: Option<String>,
    motivation: Option<String>,
    skills: Option<String>,
    availability: Option<String>,
    address: Option<String>,
    emergency_contact: Option<String>,
    emergency_phone: Option<String>,
    #[sqlx(rename = "type")]
    type_: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<Record> for ApplicationRow {
    type Error = Error;

    fn try_from(r: Record) -> Result<Self, Self::Error> {
        let id = r.id;
        let corrupt = |e: Error| Error::Store(format!("application {id} has an invalid column: {e}"));
        Ok(ApplicationRow {
            id: ApplicationId(id),
            education: r.education.map(StoredEducation::from),
            type_: r.type_.parse().map_err(corrupt)?,
            status: r.status.parse().map_err(corrupt)?,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            phone: r.phone,
            age: r.age,
            experience: r.experience,
            motivation: r.motivation,
            skills: r.skills,
            availability: r.availability,
            address: r.address,
            emergency_contact: r.emergency_contact,
            emergency_phone: r.emergency_phone,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

impl PgStore {
    pub async fn connect(url: &str) -> Result<Self, Error> {
        let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
        Ok(Self { pool })
    }
}

impl ApplicationCommon for PgStore {
    async fn insert(&self, data: ApplicationInsert) -> Result<ApplicationRow, Error> {
        let record: Record = query_as(
            "
        INSERT INTO applications (
            first_name, last_name, email, phone, age, education, experience, motivation,
            skills, availability, address, emergency_contact, emergency_phone, type, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *",
        )
        .bind(data.first_name)
        .bind(data.last_name)
        .bind(data.email)
        .bind(data.phone)
        .bind(data.age)
        .bind(data.education.as_str())
        .bind(data.experience)
        .bind(data.motivation)
        .bind(data.skills)
        .bind(data.availability)
        .bind(data.address)
        .bind(data.emergency_contact)
        .bind(data.emergency_phone)
        .bind(data.type_.as_str())
        .bind(data.status.as_str())
        .fetch_one(&self.pool)
        .await?;
        record.try_into()
    }

    async fn query(&self, query: &Query) -> Result<Vec<ApplicationRow>, Error> {
        let mut stmt = QueryBuilder::<Postgres>::new("SELECT * FROM applications WHERE 1 = 1");
        if let Some(t) = query.type_eq {
            stmt.push(" AND type = ").push_bind(t.as_str());
        }
        stmt.push(" ORDER BY created_at DESC");
        let records: Vec<Record> = stmt.build_query_as().fetch_all(&self.pool).await?;
        records.into_iter().map(ApplicationRow::try_from).collect()
    }

    async fn update_status(&self, id: ApplicationId, status: ApplicationStatus) -> Result<Option<ApplicationRow>, Error> {
        let record: Option<Record> = query_as("UPDATE applications SET status = $1, updated_at = now() WHERE id = $2 RETURNING *")
            .bind(status.as_str())
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;
        record.map(ApplicationRow::try_from).transpose()
    }

    async fn delete(&self, id: ApplicationId) -> Result<u64, Error> {
        let res = query("DELETE FROM applications WHERE id = $1").bind(id.0).execute(&self.pool).await?;
        Ok(res.rows_affected())
    }
}
