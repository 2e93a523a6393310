//! Heuristic domain categories and their default profiles.
//!
//! Classification is a case-insensitive substring test against two fixed
//! keyword lists, job keywords first. It is coarse on purpose: short keywords
//! such as `hr` or `post` also match unrelated hosts (`chrome.com`,
//! `postgresql.org`). Those misclassifications are a known limitation of the
//! heuristic.

use crate::settings::DisplaySettings;

/// Keywords marking a job board or careers site. Checked first.
const JOB_KEYWORDS: &[&str] = &[
    "job",
    "career",
    "employment",
    "recruit",
    "hr",
    "hiring",
    "vacancy",
];

/// Keywords marking a news outlet.
const NEWS_KEYWORDS: &[&str] = &["news", "times", "post", "journal", "gazette", "herald"];

/// Coarse category of a source domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainCategory {
    JobSite,
    NewsSite,
    General,
}

impl DomainCategory {
    /// Human-readable name for informational output.
    pub fn label(self) -> &'static str {
        match self {
            DomainCategory::JobSite => "job site",
            DomainCategory::NewsSite => "news site",
            DomainCategory::General => "general site",
        }
    }
}

/// Settings and hashtags suggested for a category when a domain has no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultProfile {
    pub settings: DisplaySettings,
    pub hashtags: Vec<String>,
}

/// Classify a canonical domain.
pub fn classify(domain: &str) -> DomainCategory {
    let domain = domain.to_lowercase();
    let matches_any = |keywords: &[&str]| keywords.iter().any(|k| domain.contains(k));

    if matches_any(JOB_KEYWORDS) {
        DomainCategory::JobSite
    } else if matches_any(NEWS_KEYWORDS) {
        DomainCategory::NewsSite
    } else {
        DomainCategory::General
    }
}

/// Fixed default profile for a category.
pub fn default_profile(category: DomainCategory) -> DefaultProfile {
    match category {
        // Author is usually the hiring company.
        DomainCategory::JobSite => DefaultProfile {
            settings: DisplaySettings {
                display_author: 1,
                ..DisplaySettings::default()
            },
            hashtags: vec!["#Jobs".to_string(), "#Employment".to_string()],
        },
        DomainCategory::NewsSite => DefaultProfile {
            settings: DisplaySettings {
                display_via: 1,
                ..DisplaySettings::default()
            },
            hashtags: vec!["#News".to_string()],
        },
        DomainCategory::General => DefaultProfile {
            settings: DisplaySettings::default(),
            hashtags: Vec::new(),
        },
    }
}
