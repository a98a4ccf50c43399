use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::core::auth::AdminSession;
use crate::error::Error;

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(session) = req.extensions().get::<Self>() {
            ready(Ok(session.clone()))
        } else {
            ready(Err(Error::Unauthorized))
        }
    }
}
