pub mod admin;
pub mod application;

use actix_web::web::{self, JsonConfig, QueryConfig, ServiceConfig};

use crate::core::ports::repository::ApplicationCommon;
use crate::error::Error;
use crate::middlewares::jwt::AdminGuard;

/// Registers the public `/api/applications` resource and the `/api/admin` scope.
pub fn configure<R>(cfg: &mut ServiceConfig)
where
    R: ApplicationCommon + 'static,
{
    cfg.app_data(JsonConfig::default().error_handler(|err, _| Error::Validation(err.to_string()).into()))
        .app_data(QueryConfig::default().error_handler(|err, _| Error::Validation(err.to_string()).into()))
        .service(web::resource("/api/applications/stats").route(web::get().to(application::stats::<R>)))
        .service(
            web::resource("/api/applications")
                .route(web::get().to(application::list::<R>))
                .route(web::post().to(application::create::<R>))
                .route(web::put().to(application::update_status::<R>))
                .route(web::delete().to(application::delete::<R>))
                .default_service(web::to(application::method_not_allowed)),
        )
        .service(
            web::scope("/api/admin")
                .route("/login", web::post().to(admin::login))
                .route("/logout", web::post().to(admin::logout))
                .service(web::resource("/dashboard").wrap(AdminGuard).route(web::get().to(admin::dashboard::<R>))),
        );
}
