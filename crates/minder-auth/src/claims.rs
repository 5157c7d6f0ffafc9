use super::*;
use minder_core::ID;

/// Typed JWT payload.
///
/// Deserializing into this struct is itself a validation step: a token
/// whose payload does not carry these fields with these types is rejected
/// before any subject is extracted.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub eml: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(account: ID<Account>, email: String) -> Self {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_secs() as i64;
        Self {
            sub: account.inner(),
            eml: email,
            iat: now,
            exp: now + Crypto::duration().as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp
            < std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time")
                .as_secs() as i64
    }
    pub fn subject(&self) -> ID<Account> {
        ID::from(self.sub)
    }
    pub fn email(&self) -> &str {
        &self.eml
    }
}
