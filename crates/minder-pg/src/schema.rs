use super::PgErr;
use tokio_postgres::Client;

/// Schema metadata for PostgreSQL tables.
///
/// Provides compile-time SQL generation for table creation and indexing.
/// All methods return `&'static str` to enable compile-time string
/// construction via `const_format::concatcp!` in the domain crates.
///
/// This trait contains no I/O operations—it purely describes table
/// structure. DDL execution happens through [`provision()`].
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

/// Executes table and index DDL for a schema at startup.
pub async fn provision<S: Schema>(client: &Client) -> Result<(), PgErr> {
    log::info!("provisioning table {}", S::name());
    client.batch_execute(S::creates()).await?;
    client.batch_execute(S::indices()).await?;
    Ok(())
}
