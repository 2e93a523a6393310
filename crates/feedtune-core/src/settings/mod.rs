//! Per-domain settings records and their merge with base settings.
//!
//! Records use the persisted sentinel encoding (`0` and `"auto"` mean
//! "inherit from base") so stored rows stay compatible. During a merge each
//! field is lifted into [`Setting`] and only explicit overrides are applied.

mod merge;
mod sentinel;
mod types;

pub use merge::{merge, resolve};
pub use sentinel::Setting;
pub use types::{DisplaySettings, DomainSettingsRecord, MediaHandling};
