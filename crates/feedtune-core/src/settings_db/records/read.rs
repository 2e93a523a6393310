//! Record read operations: lookup and list.

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::content_filter::FilterSpec;
use crate::settings::{DomainSettingsRecord, MediaHandling};
use crate::settings_db::db::SettingsDb;

const SELECT_COLUMNS: &str = r#"
    SELECT domain, custom_title_template, hashtag_filter, content_filter,
           media_handling, send_mode, display_author, display_via, style, enabled
    FROM domain_settings
"#;

impl SettingsDb {
    /// Enabled record for `domain`, if any. This is the lookup used when presenting items.
    pub async fn get_enabled(&self, domain: &str) -> Result<Option<DomainSettingsRecord>> {
        let sql = format!("{SELECT_COLUMNS} WHERE domain = ?1 AND enabled = 1");
        let row = sqlx::query(&sql)
            .bind(domain)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(record_from_row))
    }

    /// Record for `domain` regardless of its enabled flag.
    pub async fn get(&self, domain: &str) -> Result<Option<DomainSettingsRecord>> {
        let sql = format!("{SELECT_COLUMNS} WHERE domain = ?1");
        let row = sqlx::query(&sql)
            .bind(domain)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(record_from_row))
    }

    /// All enabled records, ordered by domain.
    pub async fn list_enabled(&self) -> Result<Vec<DomainSettingsRecord>> {
        let sql = format!("{SELECT_COLUMNS} WHERE enabled = 1 ORDER BY domain ASC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(record_from_row).collect())
    }
}

/// Decode a row. Malformed JSON columns decode as absent rather than failing
/// the whole lookup.
fn record_from_row(row: &SqliteRow) -> DomainSettingsRecord {
    let domain: String = row.get("domain");
    let hashtag_filter: Option<String> = row.get("hashtag_filter");
    let content_filter: Option<String> = row.get("content_filter");
    let media_handling: String = row.get("media_handling");
    let enabled: i64 = row.get("enabled");

    let hashtag_filter = hashtag_filter
        .as_deref()
        .and_then(|raw| match serde_json::from_str::<Vec<String>>(raw) {
            Ok(tags) => Some(tags),
            Err(e) => {
                tracing::warn!(domain = %domain, "ignoring malformed hashtag_filter: {}", e);
                None
            }
        });

    let content_filter = content_filter
        .as_deref()
        .and_then(|raw| match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => Some(FilterSpec::from_json_value(&value)),
            Err(e) => {
                tracing::warn!(domain = %domain, "ignoring malformed content_filter: {}", e);
                None
            }
        });

    DomainSettingsRecord {
        custom_title_template: row.get("custom_title_template"),
        hashtag_filter,
        content_filter,
        media_handling: MediaHandling::from_str(&media_handling),
        send_mode: small_int(row, "send_mode"),
        display_author: small_int(row, "display_author"),
        display_via: small_int(row, "display_via"),
        style: small_int(row, "style"),
        enabled: enabled != 0,
        domain,
    }
}

/// Out-of-range values decode as 0 (inherit).
fn small_int(row: &SqliteRow, column: &str) -> i16 {
    let raw: i64 = row.get(column);
    i16::try_from(raw).unwrap_or(0)
}
