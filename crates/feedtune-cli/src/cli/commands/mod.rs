//! CLI command handlers. Each command is in its own file.

mod info;
mod list;
mod preview;
mod remove;
mod set;

use anyhow::{bail, Result};
use feedtune_core::extract_domain;

pub use info::run_info;
pub use list::run_list;
pub use preview::run_preview;
pub use remove::run_remove;
pub use set::run_set;

/// Canonical domain for a user-supplied domain or URL; errors when none can be found.
pub(crate) fn canonical_domain(input: &str) -> Result<String> {
    let domain = extract_domain(input);
    if domain.is_empty() {
        bail!("invalid domain: {input:?}");
    }
    Ok(domain)
}
