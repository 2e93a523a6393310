//! Record write operations: upsert, enable/disable, remove.

use anyhow::Result;

use crate::settings::DomainSettingsRecord;
use crate::settings_db::db::{unix_timestamp, SettingsDb};

impl SettingsDb {
    /// Insert `record`, or replace every field of the existing row for its domain.
    ///
    /// `created_at` is kept on update.
    pub async fn upsert(&self, record: &DomainSettingsRecord) -> Result<()> {
        anyhow::ensure!(!record.domain.is_empty(), "domain must not be empty");

        let now = unix_timestamp();
        let hashtag_filter = record
            .hashtag_filter
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let content_filter = record
            .content_filter
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r#"
            INSERT INTO domain_settings (
                created_at, updated_at, domain, custom_title_template,
                hashtag_filter, content_filter, media_handling,
                send_mode, display_author, display_via, style, enabled
            ) VALUES (?1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT(domain) DO UPDATE SET
                updated_at = excluded.updated_at,
                custom_title_template = excluded.custom_title_template,
                hashtag_filter = excluded.hashtag_filter,
                content_filter = excluded.content_filter,
                media_handling = excluded.media_handling,
                send_mode = excluded.send_mode,
                display_author = excluded.display_author,
                display_via = excluded.display_via,
                style = excluded.style,
                enabled = excluded.enabled
            "#,
        )
        .bind(now)
        .bind(&record.domain)
        .bind(record.custom_title_template.as_deref())
        .bind(hashtag_filter)
        .bind(content_filter)
        .bind(record.media_handling.as_str())
        .bind(i64::from(record.send_mode))
        .bind(i64::from(record.display_author))
        .bind(i64::from(record.display_via))
        .bind(i64::from(record.style))
        .bind(i64::from(record.enabled))
        .execute(&self.pool)
        .await?;

        tracing::info!(domain = %record.domain, "saved domain settings");
        Ok(())
    }

    /// Flip the enabled flag. Returns false if no record exists for `domain`.
    pub async fn set_enabled(&self, domain: &str, enabled: bool) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE domain_settings
            SET enabled = ?1,
                updated_at = ?2
            WHERE domain = ?3
            "#,
        )
        .bind(i64::from(enabled))
        .bind(unix_timestamp())
        .bind(domain)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the record for `domain`. Returns false if there was none.
    pub async fn remove(&self, domain: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM domain_settings WHERE domain = ?1")
            .bind(domain)
            .execute(&self.pool)
            .await?;
        let removed = result.rows_affected() > 0;
        if removed {
            tracing::info!(domain, "removed domain settings");
        }
        Ok(removed)
    }
}
