use contracts::domain::a003_calendar::aggregate::CalendarWeek;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use std::path::Path;

/// Хранилище поверх SQLite через sea-orm
///
/// Передается в сервисы явно (через `AppState`), глобального соединения нет.
#[derive(Clone)]
pub struct SqliteDatastore {
    conn: DatabaseConnection,
}

/// Схема: (имя таблицы, DDL)
const TABLES: [(&str, &str); 4] = [
    (
        "a001_store",
        r#"
        CREATE TABLE a001_store (
            id TEXT PRIMARY KEY NOT NULL,
            label TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            created_at TEXT
        );
    "#,
    ),
    (
        "a002_sku",
        r#"
        CREATE TABLE a002_sku (
            id TEXT PRIMARY KEY NOT NULL,
            label TEXT NOT NULL,
            class TEXT NOT NULL,
            department TEXT NOT NULL,
            price REAL NOT NULL DEFAULT 0,
            cost REAL NOT NULL DEFAULT 0,
            created_at TEXT
        );
    "#,
    ),
    (
        "a003_calendar",
        r#"
        CREATE TABLE a003_calendar (
            week TEXT PRIMARY KEY NOT NULL,
            month TEXT NOT NULL
        );
    "#,
    ),
    (
        "p001_planning",
        r#"
        CREATE TABLE p001_planning (
            store_id TEXT NOT NULL,
            sku_id TEXT NOT NULL,
            week TEXT NOT NULL,
            sales_units INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (store_id, sku_id, week)
        );
    "#,
    ),
];

impl SqliteDatastore {
    /// Открыть (или создать) файл БД и подготовить схему
    pub async fn open(db_file: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = db_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let absolute_path = if db_file.is_absolute() {
            db_file.to_path_buf()
        } else {
            std::env::current_dir()?.join(db_file)
        };
        let db_url = build_sqlite_url(&absolute_path);
        tracing::info!("Opening database {}", db_url);

        let conn = Database::connect(&db_url).await?;
        Self::from_connection(conn).await
    }

    /// БД в памяти; одно соединение, иначе каждое соединение пула видит свою пустую БД
    pub async fn open_in_memory() -> anyhow::Result<Self> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let conn = Database::connect(opt).await?;
        Self::from_connection(conn).await
    }

    async fn from_connection(conn: DatabaseConnection) -> anyhow::Result<Self> {
        bootstrap_schema(&conn).await?;
        seed_calendar(&conn).await?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}

fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

async fn table_exists(conn: &DatabaseConnection, table_name: &str) -> anyhow::Result<bool> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?",
            [table_name.into()],
        ))
        .await?;
    Ok(!rows.is_empty())
}

async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table_name, ddl) in TABLES {
        if table_exists(conn, table_name).await? {
            tracing::debug!("Table {} already exists", table_name);
            continue;
        }
        tracing::info!("Creating {} table", table_name);
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, ddl.to_string()))
            .await?;
    }
    Ok(())
}

/// Справочник календаря заполняется идемпотентно
async fn seed_calendar(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let calendar = CalendarWeek::canonical();
    let placeholders = vec!["(?, ?)"; calendar.len()].join(", ");
    let sql = format!(
        "INSERT OR IGNORE INTO a003_calendar (week, month) VALUES {}",
        placeholders
    );
    let mut values: Vec<sea_orm::Value> = Vec::with_capacity(calendar.len() * 2);
    for row in calendar {
        values.push(row.week.into());
        values.push(row.month.into());
    }
    let result = conn
        .execute(Statement::from_sql_and_values(DatabaseBackend::Sqlite, &sql, values))
        .await?;
    if result.rows_affected() > 0 {
        tracing::info!("Seeded {} calendar weeks", result.rows_affected());
    }
    Ok(())
}
