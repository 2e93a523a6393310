//! SQLite-backed settings database.
//!
//! Handles connection, migrations, and timestamp helpers. Record CRUD lives in `records`.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite-backed settings database.
///
/// The default database file lives under the XDG state directory:
/// `~/.local/state/feedtune/domains.db`.
#[derive(Clone)]
pub struct SettingsDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl std::fmt::Debug for SettingsDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsDb").finish_non_exhaustive()
    }
}

impl SettingsDb {
    /// Open (or create) the default settings database and run migrations.
    pub async fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("feedtune")?;
        let db_path = xdg_dirs.get_state_home().join("domains.db");
        Self::open_at(db_path).await
    }

    /// Open (or create) the database at a specific path. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect(&uri)
            .await?;
        let db = SettingsDb { pool };
        db.migrate().await?;
        tracing::debug!(path = %path.display(), "opened settings database");
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // - `hashtag_filter` holds a JSON array of strings.
        // - `content_filter` holds a JSON object with `remove_patterns` and `replace_patterns`.
        // - Integer display fields use 0 and `media_handling` uses 'auto' for "inherit".
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS domain_settings (
                id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                domain VARCHAR(255) NOT NULL UNIQUE,
                custom_title_template VARCHAR(1024),
                hashtag_filter TEXT,
                content_filter TEXT,
                media_handling VARCHAR(32) NOT NULL DEFAULT 'auto',
                send_mode SMALLINT NOT NULL DEFAULT 0,
                display_author SMALLINT NOT NULL DEFAULT 0,
                display_via SMALLINT NOT NULL DEFAULT 0,
                style SMALLINT NOT NULL DEFAULT 0,
                enabled INT NOT NULL DEFAULT 1
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_domain_settings_domain ON domain_settings (domain)",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_domain_settings_enabled ON domain_settings (enabled)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Current time as Unix seconds (for DB timestamps).
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<SettingsDb> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = SettingsDb { pool };
    db.migrate().await?;
    Ok(db)
}
