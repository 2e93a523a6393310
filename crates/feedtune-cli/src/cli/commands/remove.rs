//! `feedtune remove <domain>` – delete settings for a domain.

use anyhow::Result;
use feedtune_core::SettingsDb;

use super::canonical_domain;

pub async fn run_remove(db: &SettingsDb, input: &str) -> Result<()> {
    let domain = canonical_domain(input)?;
    if db.remove(&domain).await? {
        println!("Removed settings for {domain}");
    } else {
        println!("No settings found for {domain}");
    }
    Ok(())
}
