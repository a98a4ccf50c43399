use crate::core::tokener::{Payload, Tokener};
use crate::error::Error;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

pub struct JWT {
    secret: Vec<u8>,
}

impl JWT {
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }
}

impl<P> Tokener<P> for JWT
where
    P: Payload,
{
    fn gen_token(&self, payload: &P) -> Result<String, Error> {
        let header = Header::new(Algorithm::HS256);
        let key = EncodingKey::from_secret(&self.secret);
        let token = encode(&header, payload, &key).map_err(|e| Error::Configuration(format!("failed to sign session token: {e}")))?;
        Ok(token)
    }
    fn verify_token(&self, token: &str) -> Result<P, Error> {
        let key = DecodingKey::from_secret(&self.secret);
        let validation = Validation::new(Algorithm::HS256);
        let payload = decode(token, &key, &validation)?;
        Ok(payload.claims)
    }
}
