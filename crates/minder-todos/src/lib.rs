//! Owner-scoped todo storage for minder.
//!
//! Every read and write is parameterized by both the todo id and the
//! owner id, so another user's rows are indistinguishable from rows that
//! do not exist. Ownership comes from the verified token subject, never
//! from the request body.
//!
//! ## Domain
//!
//! - [`Todo`] — Owned task row
//! - [`TodoError`] — Miss vs. store failure taxonomy
//!
//! ## Transport
//!
//! - [`TodoPatch`] — Presence-aware partial update
mod dto;
mod todo;

pub use dto::*;
pub use todo::*;

#[cfg(feature = "database")]
mod errors;
#[cfg(feature = "database")]
mod repository;
#[cfg(feature = "database")]
pub use errors::*;
#[cfg(feature = "database")]
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
pub use handlers::*;
