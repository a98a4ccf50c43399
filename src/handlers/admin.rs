use actix_web::{
    cookie::{time::OffsetDateTime, CookieBuilder},
    web::{Data, Json, Query},
    HttpResponse,
};
use log::{debug, info, warn};
use serde::Serialize;

use crate::core::auth::AdminSession;
use crate::core::filter::{filter, stats, Stats};
use crate::core::models::application::Application;
use crate::core::ports::repository::ApplicationCommon;
use crate::core::services::application::Applications;
use crate::error::Error;
use crate::middlewares::jwt::{AdminGate, ADMIN_TOKEN};
use crate::request::{ListFilter, Login};
use crate::response::Envelope;

#[derive(Debug, Serialize)]
pub struct Token {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub stats: Stats,
    pub applications: Vec<Application>,
}

pub async fn login(Json(Login { password }): Json<Login>, gate: Data<AdminGate>) -> Result<HttpResponse, Error> {
    let token = gate.login(&password).map_err(|e| {
        warn!("rejected admin login");
        e
    })?;
    info!("admin logged in");
    Ok(HttpResponse::Ok()
        .cookie(CookieBuilder::new(ADMIN_TOKEN, token.clone()).path("/").http_only(true).finish())
        .json(Envelope::ok(Token { token })))
}

pub async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(CookieBuilder::new(ADMIN_TOKEN, "").path("/").expires(OffsetDateTime::now_utc()).finish())
        .json(Envelope::done())
}

/// Stats are computed over every record, the list honours the filters.
pub async fn dashboard<R>(
    session: AdminSession,
    Query(ListFilter { type_, status }): Query<ListFilter>,
    applications: Data<Applications<R>>,
) -> Result<HttpResponse, Error>
where
    R: ApplicationCommon + 'static,
{
    let records = applications.list_all().await?;
    debug!("dashboard for {} ({} records)", session.subject, records.len());
    Ok(HttpResponse::Ok().json(Envelope::ok(Dashboard {
        stats: stats(&records),
        applications: filter(records, type_, status),
    })))
}
