use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

const CREATE_INVOICE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a001_invoice (
        id TEXT PRIMARY KEY NOT NULL,
        invoice_number TEXT NOT NULL,
        invoice_date TEXT NOT NULL,
        item_name TEXT NOT NULL,
        price REAL NOT NULL,
        expiry_date TEXT NOT NULL,
        done INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL
    );
"#;

/// Открыть (или создать) файл SQLite и убедиться, что схема на месте
pub async fn initialize_database(db_file: &str) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database {}", normalized);
    let conn = Database::connect(&db_url).await?;

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_INVOICE_TABLE.to_string(),
    ))
    .await?;

    Ok(conn)
}
