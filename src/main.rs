mod config;
mod context;
mod core;
mod error;
mod handlers;
mod impls;
mod middlewares;
mod request;
mod response;

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::info;

use crate::config::Config;
use crate::core::auth::{Gatekeeper, PasswordDigest};
use crate::core::services::application::Applications;
use crate::impls::store::Store;
use crate::impls::tokener::jwt::JWT;
use crate::middlewares::cors::Cors;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let config = Config::load()?;
    let applications = Data::new(Applications::from(Store::from_config(&config).await?));
    let gate = Data::new(Gatekeeper::new(
        PasswordDigest::new(&config.admin_password),
        JWT::new(config.jwt_secret.clone().into_bytes()),
    ));
    info!("listening on {}:{}", config.bind_address, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors)
            .wrap(Logger::default())
            .app_data(applications.clone())
            .app_data(gate.clone())
            .configure(handlers::configure::<Store>)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await?;
    Ok(())
}
