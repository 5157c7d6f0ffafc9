use super::*;
use minder_core::ID;
use minder_core::Unique;
use minder_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Repository trait for account database operations.
/// Abstracts SQL from domain modules. Every query runs under the store
/// deadline via [`bounded()`].
#[allow(async_fn_in_trait)]
pub trait AccountRepository {
    async fn create(&self, email: &str, hashword: &str) -> Result<Account, StoreError>;
    async fn lookup(&self, email: &str) -> Result<Option<(Account, String)>, StoreError>;
}

impl AccountRepository for Arc<Client> {
    async fn create(&self, email: &str, hashword: &str) -> Result<Account, StoreError> {
        let id = ID::<Account>::default();
        bounded(self.query_one(
            const_format::concatcp!(
                "INSERT INTO ",
                USERS,
                " (id, email, hashword) VALUES ($1, $2, $3)
                  RETURNING created_at, updated_at"
            ),
            &[&id.inner(), &email, &hashword],
        ))
        .await
        .map(|row| {
            Account::new(
                id,
                email.to_string(),
                row.get::<_, chrono::DateTime<chrono::Utc>>(0),
                row.get::<_, chrono::DateTime<chrono::Utc>>(1),
            )
        })
    }

    async fn lookup(&self, email: &str) -> Result<Option<(Account, String)>, StoreError> {
        bounded(self.query_opt(
            const_format::concatcp!(
                "SELECT id, email, hashword, created_at, updated_at FROM ",
                USERS,
                " WHERE email = $1"
            ),
            &[&email],
        ))
        .await
        .map(|opt| {
            opt.map(|row| {
                (
                    Account::new(
                        ID::from(row.get::<_, uuid::Uuid>(0)),
                        row.get::<_, String>(1),
                        row.get::<_, chrono::DateTime<chrono::Utc>>(3),
                        row.get::<_, chrono::DateTime<chrono::Utc>>(4),
                    ),
                    row.get::<_, String>(2),
                )
            })
        })
    }
}
