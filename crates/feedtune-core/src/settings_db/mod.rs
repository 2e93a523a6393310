//! Persistent per-domain settings store (SQLite via sqlx).
//!
//! One row per canonical domain. The pure resolver never touches the store;
//! callers look a record up here and pass it in.

mod db;
mod records;

pub use db::SettingsDb;
