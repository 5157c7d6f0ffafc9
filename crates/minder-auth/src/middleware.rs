use super::*;
use minder_core::ID;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use std::future::Ready;

/// Extractor for authenticated requests.
///
/// Pulls the bearer token out of the Authorization header and verifies it
/// against the server secret. Tokens are self-contained, so extraction is
/// synchronous and never touches storage. Every failure, whether a missing
/// header, a bad scheme, or any verification gate, surfaces as the same
/// generic 401 body.
pub struct Auth(ID<Account>);

impl Auth {
    pub fn subject(&self) -> ID<Account> {
        self.0
    }
    fn bearer(req: &HttpRequest) -> Result<&str, AuthError> {
        req.headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or(AuthError::Unauthenticated)
    }
    fn verify(req: &HttpRequest) -> Result<Self, AuthError> {
        let token = Self::bearer(req)?;
        let crypto = req
            .app_data::<web::Data<Crypto>>()
            .ok_or(AuthError::Unauthenticated)?;
        crypto.verify(token).map(Self)
    }
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(Self::verify(req).map_err(|e| {
            log::debug!("rejected bearer credential: {}", e);
            actix_web::error::ErrorUnauthorized("unauthorized")
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn authed(header: Option<&str>) -> Result<Auth, actix_web::Error> {
        let crypto = web::Data::new(Crypto::new(b"test-secret"));
        let req = match header {
            Some(value) => TestRequest::default()
                .app_data(crypto)
                .insert_header(("Authorization", value))
                .to_http_request(),
            None => TestRequest::default().app_data(crypto).to_http_request(),
        };
        Auth::verify(&req).map_err(|_| actix_web::error::ErrorUnauthorized("unauthorized"))
    }

    #[actix_web::test]
    async fn missing_header_is_rejected() {
        assert!(authed(None).is_err());
    }

    #[actix_web::test]
    async fn non_bearer_scheme_is_rejected() {
        assert!(authed(Some("Basic dXNlcjpwYXNz")).is_err());
    }

    #[actix_web::test]
    async fn invalid_token_is_rejected() {
        assert!(authed(Some("Bearer not-a-token")).is_err());
    }

    #[actix_web::test]
    async fn valid_token_yields_subject() {
        let crypto = Crypto::new(b"test-secret");
        let account = ID::<Account>::default();
        let claims = Claims::new(account, "a@b.c".to_string());
        let token = crypto.encode(&claims).unwrap();
        let auth = authed(Some(&format!("Bearer {}", token))).unwrap();
        assert_eq!(auth.subject(), account);
    }
}
