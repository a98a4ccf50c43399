use actix_web::{
    web::{Data, Json, Query},
    HttpResponse,
};

use crate::core::filter::{filter, stats as count, Selector};
use crate::core::models::application::Submission;
use crate::core::ports::repository::ApplicationCommon;
use crate::core::services::application::Applications;
use crate::error::Error;
use crate::request::{IdQuery, ListFilter, StatusUpdate};
use crate::response::Envelope;

/// All applications, newest first. `type` narrows the store query, `status` is applied here.
pub async fn list<R>(Query(ListFilter { type_, status }): Query<ListFilter>, applications: Data<Applications<R>>) -> Result<HttpResponse, Error>
where
    R: ApplicationCommon + 'static,
{
    let records = match type_ {
        Selector::Only(t) => applications.list_by_type(t).await?,
        Selector::All => applications.list_all().await?,
    };
    Ok(HttpResponse::Ok().json(Envelope::ok(filter(records, Selector::All, status))))
}

pub async fn create<R>(Json(submission): Json<Submission>, applications: Data<Applications<R>>) -> Result<HttpResponse, Error>
where
    R: ApplicationCommon + 'static,
{
    let created = applications.create(submission).await?;
    Ok(HttpResponse::Created().json(Envelope::ok(created)))
}

pub async fn update_status<R>(Json(StatusUpdate { id, status }): Json<StatusUpdate>, applications: Data<Applications<R>>) -> Result<HttpResponse, Error>
where
    R: ApplicationCommon + 'static,
{
    let updated = applications.update_status(id, status).await?;
    Ok(HttpResponse::Ok().json(Envelope::ok(updated)))
}

pub async fn delete<R>(Query(IdQuery { id }): Query<IdQuery>, applications: Data<Applications<R>>) -> Result<HttpResponse, Error>
where
    R: ApplicationCommon + 'static,
{
    applications.delete(id).await?;
    Ok(HttpResponse::Ok().json(Envelope::done()))
}

pub async fn stats<R>(applications: Data<Applications<R>>) -> Result<HttpResponse, Error>
where
    R: ApplicationCommon + 'static,
{
    let records = applications.list_all().await?;
    Ok(HttpResponse::Ok().json(Envelope::ok(count(&records))))
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(Envelope::failed("Method not allowed"))
}
