use minder_core::ID;
use minder_core::Unique;

/// Registered principal with verified identity.
///
/// The password digest is a storage-only column and never appears on this
/// type, so no handler can leak it by serializing an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: ID<Self>,
    email: String,
    created: chrono::DateTime<chrono::Utc>,
    updated: chrono::DateTime<chrono::Utc>,
}

impl Account {
    pub fn new(
        id: ID<Self>,
        email: String,
        created: chrono::DateTime<chrono::Utc>,
        updated: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            id,
            email,
            created,
            updated,
        }
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn created(&self) -> chrono::DateTime<chrono::Utc> {
        self.created
    }
    pub fn updated(&self) -> chrono::DateTime<chrono::Utc> {
        self.updated
    }
}

impl Unique for Account {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use minder_pg::*;

    /// Schema implementation for Account (users table).
    /// Note: hashword is a database-only field, not part of the Account domain type.
    impl Schema for Account {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id          UUID PRIMARY KEY,
                    email       VARCHAR(255) UNIQUE NOT NULL,
                    hashword    TEXT NOT NULL,
                    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
                    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now()
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_email ON ",
                USERS,
                " (email);"
            )
        }
    }
}
