//! Domain canonicalization.
//!
//! Every per-domain lookup is keyed by a canonical domain: the lowercase host
//! of a URL with any leading `www.` removed. An empty string means the domain
//! could not be determined; callers decide whether that is an error.
//!
//! [`extract_domain`] is the pure function. [`DomainCanonicalizer`] wraps it
//! with a bounded, shareable LRU cache since feeds hand us the same raw links
//! over and over.

mod cache;
mod canonical;

pub use cache::{DomainCanonicalizer, DEFAULT_CACHE_CAPACITY};
pub use canonical::extract_domain;
