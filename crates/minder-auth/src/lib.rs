//! Authentication and identity management for minder.
//!
//! JWT-based stateless authentication with Argon2 password hashing.
//! Tokens are self-contained: issuance signs a typed claim set with the
//! server secret, and verification extracts the subject without touching
//! storage. Expiry is the only way a token stops being valid.
//!
//! ## Identity
//!
//! - [`Account`] — Registered principal with credentials
//! - [`Claims`] — Typed JWT payload
//!
//! ## Security
//!
//! - [`Crypto`] — JWT signing and gated verification (HS256 only)
//! - [`password`] — Argon2 hashing and verification
//! - [`AuthError`] — Credential and token failure taxonomy
mod account;
mod claims;
mod crypto;
mod dto;
mod errors;
pub mod password;

pub use account::*;
pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use errors::*;

#[cfg(feature = "database")]
mod repository;
#[cfg(feature = "database")]
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
