use chrono::{Duration, Utc};
use hex::ToHex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::core::tokener::{Payload, Tokener};
use crate::error::Error;

pub const ADMIN_SUBJECT: &str = "admin";

pub trait CredentialVerifier {
    fn verify(&self, password: &str) -> bool;
}

/// Verifies a password against the SHA-256 digest of the configured one.
pub struct PasswordDigest {
    digest: String,
}

impl PasswordDigest {
    pub fn new(password: &str) -> Self {
        Self { digest: hash_password(password) }
    }
}

impl CredentialVerifier for PasswordDigest {
    fn verify(&self, password: &str) -> bool {
        hash_password(password) == self.digest
    }
}

fn hash_password(pass: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pass);
    hasher.finalize().encode_hex()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminClaim {
    pub user: String,
    pub exp: i64,
}

impl AdminClaim {
    pub fn new(user: &str, ttl: Duration) -> Self {
        Self {
            user: user.to_owned(),
            exp: (Utc::now() + ttl).timestamp(),
        }
    }
}

impl Payload for AdminClaim {
    fn subject(&self) -> &str {
        &self.user
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// Proof of a successful admin login, attached to the request by the session middleware.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub subject: String,
    pub expires_at: i64,
}

/// Issues and checks admin session tokens.
pub struct Gatekeeper<V, T> {
    verifier: V,
    tokener: T,
    ttl: Duration,
}

impl<V, T> Gatekeeper<V, T>
where
    V: CredentialVerifier,
    T: Tokener<AdminClaim>,
{
    pub fn new(verifier: V, tokener: T) -> Self {
        Self {
            verifier,
            tokener,
            ttl: Duration::hours(24),
        }
    }

    pub fn login(&self, password: &str) -> Result<String, Error> {
        if !self.verifier.verify(password) {
            return Err(Error::Unauthorized);
        }
        self.tokener.gen_token(&AdminClaim::new(ADMIN_SUBJECT, self.ttl))
    }

    pub fn authenticate(&self, token: &str) -> Result<AdminSession, Error> {
        let claim: AdminClaim = self.tokener.verify_token(token)?;
        if claim.subject() != ADMIN_SUBJECT {
            return Err(Error::Unauthorized);
        }
        Ok(AdminSession {
            subject: claim.subject().to_owned(),
            expires_at: claim.expires_at(),
        })
    }
}
