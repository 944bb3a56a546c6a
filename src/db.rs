// Per-chat session state: FAQ document, image annotation, dialogue history.

use anyhow::Result;
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

pub mod annotation;
pub mod database;
pub mod faq;
pub mod history;

pub use database::Database;
pub use history::{ChatMessage, ROLE_ASSISTANT, ROLE_USER};

/// Ensure file-backed SQLite URLs are opened in read-write-create mode so a
/// fresh deployment can create its own database file.
pub fn prepare_sqlite_url(url: &str) -> String {
    if url.starts_with("sqlite:") && !url.contains("mode=") && !url.contains(":memory:") {
        if url.contains('?') {
            format!("{url}&mode=rwc")
        } else {
            format!("{url}?mode=rwc")
        }
    } else {
        url.to_string()
    }
}

pub async fn connect_db(db_url: &str, max_connections: u32) -> Result<Pool<Sqlite>> {
    tracing::debug!(db_url = %db_url, "Connecting to database");
    Ok(SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(db_url)
        .await?)
}

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Connect and bring the schema up to date with the embedded migrations.
pub async fn init_db(db_url: &str) -> Result<Database> {
    let pool = connect_db(&prepare_sqlite_url(db_url), 5).await?;
    MIGRATOR.run(&pool).await?;
    Ok(Database::new(pool))
}
