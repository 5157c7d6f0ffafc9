use minder_auth::Account;
use minder_core::ID;
use minder_core::Unique;

/// Owned task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: ID<Self>,
    title: String,
    completed: bool,
    owner: ID<Account>,
    created: chrono::DateTime<chrono::Utc>,
    updated: chrono::DateTime<chrono::Utc>,
}

impl Todo {
    pub fn new(
        id: ID<Self>,
        title: String,
        completed: bool,
        owner: ID<Account>,
        created: chrono::DateTime<chrono::Utc>,
        updated: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            id,
            title,
            completed,
            owner,
            created,
            updated,
        }
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn completed(&self) -> bool {
        self.completed
    }
    pub fn owner(&self) -> ID<Account> {
        self.owner
    }
    pub fn created(&self) -> chrono::DateTime<chrono::Utc> {
        self.created
    }
    pub fn updated(&self) -> chrono::DateTime<chrono::Utc> {
        self.updated
    }
}

impl Unique for Todo {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use minder_pg::*;

    impl Schema for Todo {
        fn name() -> &'static str {
            TODOS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                TODOS,
                " (
                    id          UUID PRIMARY KEY,
                    title       TEXT NOT NULL,
                    completed   BOOLEAN NOT NULL DEFAULT FALSE,
                    owner_id    UUID NOT NULL REFERENCES ",
                USERS,
                " (id) ON DELETE CASCADE,
                    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
                    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now()
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_todos_owner_created ON ",
                TODOS,
                " (owner_id, created_at DESC);"
            )
        }
    }
}
