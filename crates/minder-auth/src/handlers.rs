use super::*;
use minder_pg::StoreError;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

pub async fn register(db: web::Data<Arc<Client>>, req: web::Json<RegisterRequest>) -> impl Responder {
    let email = req.email.trim();
    if email.is_empty() {
        return HttpResponse::BadRequest().body("email must not be empty");
    }
    let hashword = match password::hash(&req.password) {
        Ok(h) => h,
        Err(AuthError::WeakPassword) => {
            return HttpResponse::BadRequest().body(const_format::formatcp!(
                "password must be at least {} characters",
                password::MIN_PASSWORD_LEN
            ));
        }
        Err(e) => {
            log::error!("password hashing failed: {}", e);
            return HttpResponse::InternalServerError().body("internal error");
        }
    };
    match db.create(email, &hashword).await {
        Ok(account) => HttpResponse::Created().json(AccountInfo::from(&account)),
        Err(ref e) if e.is_unique_violation() => {
            HttpResponse::Conflict().body("email already registered")
        }
        Err(StoreError::Timeout) => {
            log::warn!("account creation timed out");
            HttpResponse::ServiceUnavailable().body("store timeout")
        }
        Err(e) => {
            log::error!("account creation failed: {}", e);
            HttpResponse::InternalServerError().body("store unavailable")
        }
    }
}

/// Exchanges credentials for a signed token. Unknown email and wrong
/// password produce identical responses, and password verification runs
/// in constant time within argon2, so neither channel reveals whether the
/// account exists.
pub async fn login(
    db: web::Data<Arc<Client>>,
    tokens: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    let (account, hashword) = match db.lookup(&req.email).await {
        Ok(Some(row)) => row,
        Ok(None) => return HttpResponse::Unauthorized().body("invalid credentials"),
        Err(StoreError::Timeout) => {
            log::warn!("credential lookup timed out");
            return HttpResponse::ServiceUnavailable().body("store timeout");
        }
        Err(e) => {
            log::error!("credential lookup failed: {}", e);
            return HttpResponse::InternalServerError().body("store unavailable");
        }
    };
    if !password::verify(&req.password, &hashword) {
        return HttpResponse::Unauthorized().body("invalid credentials");
    }
    use minder_core::Unique;
    let claims = Claims::new(account.id(), account.email().to_string());
    match tokens.encode(&claims) {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(e) => {
            log::error!("token signing failed: {}", e);
            HttpResponse::InternalServerError().body("internal error")
        }
    }
}
