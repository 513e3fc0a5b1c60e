pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Opens the configured database.
///
/// `DATABASE_PATH` may be a full DSN (`sqlite:...`) or a plain SQLite file path;
/// file paths get their parent directory created and are opened in
/// read-write-create mode.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    let url = if path_or_url.starts_with("sqlite:") {
        path_or_url
    } else {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(&path_or_url).parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!(dir = %parent.display(), %err, "Failed to create database directory");
            }
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    tracing::info!(%url, "Connecting to database");
    Database::connect(&url).await
}
