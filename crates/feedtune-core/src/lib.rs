pub mod config;
pub mod logging;

pub mod classify;
pub mod content_filter;
pub mod domain;
pub mod hashtags;
pub mod presenter;
pub mod settings;
pub mod settings_db;
pub mod title;

pub use classify::{classify, default_profile, DefaultProfile, DomainCategory};
pub use content_filter::{FilterOutcome, FilterSpec, ReplaceRule, SkippedRule};
pub use domain::{extract_domain, DomainCanonicalizer};
pub use presenter::{ItemInput, PresentedItem, Presenter};
pub use settings::{DisplaySettings, DomainSettingsRecord, MediaHandling, Setting};
pub use settings_db::SettingsDb;
