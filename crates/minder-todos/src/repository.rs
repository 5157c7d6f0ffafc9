use super::*;
use minder_auth::Account;
use minder_core::ID;
use minder_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::Row;

/// Repository trait for todo database operations.
///
/// Every statement predicates on both the row id and the owner id, so a
/// lookup of someone else's todo is a miss, not a leak. Reads and writes
/// run under the store deadline via [`bounded()`].
#[allow(async_fn_in_trait)]
pub trait TodoRepository {
    async fn create(&self, owner: ID<Account>, title: &str, completed: bool)
    -> Result<Todo, StoreError>;
    async fn list(&self, owner: ID<Account>) -> Result<Vec<Todo>, StoreError>;
    async fn get(&self, id: ID<Todo>, owner: ID<Account>) -> Result<Todo, TodoError>;
    async fn update(
        &self,
        id: ID<Todo>,
        owner: ID<Account>,
        patch: &TodoPatch,
    ) -> Result<Todo, TodoError>;
    async fn delete(&self, id: ID<Todo>, owner: ID<Account>) -> Result<(), TodoError>;
}

fn hydrate(row: &Row) -> Todo {
    Todo::new(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        row.get::<_, String>(1),
        row.get::<_, bool>(2),
        ID::from(row.get::<_, uuid::Uuid>(3)),
        row.get::<_, chrono::DateTime<chrono::Utc>>(4),
        row.get::<_, chrono::DateTime<chrono::Utc>>(5),
    )
}

const COLUMNS: &str = "id, title, completed, owner_id, created_at, updated_at";

const CREATE_SQL: &str = const_format::concatcp!(
    "INSERT INTO ",
    TODOS,
    " (id, title, completed, owner_id) VALUES ($1, $2, $3, $4)
      RETURNING ",
    COLUMNS
);

const LIST_SQL: &str = const_format::concatcp!(
    "SELECT ",
    COLUMNS,
    " FROM ",
    TODOS,
    " WHERE owner_id = $1 ORDER BY created_at DESC"
);

const GET_SQL: &str = const_format::concatcp!(
    "SELECT ",
    COLUMNS,
    " FROM ",
    TODOS,
    " WHERE id = $1 AND owner_id = $2"
);

const UPDATE_SQL: &str = const_format::concatcp!(
    "UPDATE ",
    TODOS,
    " SET title      = COALESCE($3, title),
          completed  = COALESCE($4, completed),
          updated_at = now()
      WHERE id = $1 AND owner_id = $2
      RETURNING ",
    COLUMNS
);

const DELETE_SQL: &str =
    const_format::concatcp!("DELETE FROM ", TODOS, " WHERE id = $1 AND owner_id = $2");

impl TodoRepository for Arc<Client> {
    async fn create(
        &self,
        owner: ID<Account>,
        title: &str,
        completed: bool,
    ) -> Result<Todo, StoreError> {
        let id = ID::<Todo>::default();
        bounded(self.query_one(
            CREATE_SQL,
            &[&id.inner(), &title, &completed, &owner.inner()],
        ))
        .await
        .map(|row| hydrate(&row))
    }

    async fn list(&self, owner: ID<Account>) -> Result<Vec<Todo>, StoreError> {
        bounded(self.query(LIST_SQL, &[&owner.inner()]))
            .await
            .map(|rows| rows.iter().map(hydrate).collect())
    }

    async fn get(&self, id: ID<Todo>, owner: ID<Account>) -> Result<Todo, TodoError> {
        bounded(self.query_opt(GET_SQL, &[&id.inner(), &owner.inner()]))
            .await?
            .map(|row| hydrate(&row))
            .ok_or(TodoError::Missing)
    }

    /// Merges the patch in a single statement. COALESCE falls back to the
    /// stored value exactly when the patch field was absent, which keeps
    /// the read and the write atomic under concurrent updates.
    async fn update(
        &self,
        id: ID<Todo>,
        owner: ID<Account>,
        patch: &TodoPatch,
    ) -> Result<Todo, TodoError> {
        bounded(self.query_opt(
            UPDATE_SQL,
            &[&id.inner(), &owner.inner(), &patch.title, &patch.completed],
        ))
        .await?
        .map(|row| hydrate(&row))
        .ok_or(TodoError::Missing)
    }

    async fn delete(&self, id: ID<Todo>, owner: ID<Account>) -> Result<(), TodoError> {
        let rows = bounded(self.execute(DELETE_SQL, &[&id.inner(), &owner.inner()])).await?;
        match rows {
            0 => Err(TodoError::Missing),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ownership isolation lives in the statement text itself: no query
    // reaches a row by id alone, so one owner's rows can never hydrate
    // for another.

    #[test]
    fn reads_are_scoped_to_the_owner() {
        assert!(GET_SQL.contains("WHERE id = $1 AND owner_id = $2"));
        assert!(LIST_SQL.contains("WHERE owner_id = $1"));
    }

    #[test]
    fn writes_are_scoped_to_the_owner() {
        assert!(UPDATE_SQL.contains("WHERE id = $1 AND owner_id = $2"));
        assert!(DELETE_SQL.contains("WHERE id = $1 AND owner_id = $2"));
    }

    #[test]
    fn create_binds_the_owner_column() {
        assert!(CREATE_SQL.contains("owner_id) VALUES ($1, $2, $3, $4)"));
    }

    #[test]
    fn update_merges_each_field_from_the_patch() {
        assert!(UPDATE_SQL.contains("COALESCE($3, title)"));
        assert!(UPDATE_SQL.contains("COALESCE($4, completed)"));
    }

    #[test]
    fn list_is_newest_first() {
        assert!(LIST_SQL.contains("ORDER BY created_at DESC"));
    }
}
