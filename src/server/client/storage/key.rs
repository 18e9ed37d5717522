use std::fmt;

use chrono::{DateTime, Utc};

/// Top-level folder an upload is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageCategory {
    Notes,
    Pyqs,
    Branches,
}

impl StorageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Pyqs => "pyqs",
            Self::Branches => "branches",
        }
    }
}

/// Lowercases a display name and joins its words with `-`
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Object key of the form `uploads/<category>/<slug>-<epoch-millis><ext>`.
///
/// The millisecond timestamp keeps keys for the same display name apart without any
/// coordination between submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(category: StorageCategory, name: &str, extension: &str) -> Self {
        Self::at(category, name, extension, Utc::now())
    }

    pub fn at(
        category: StorageCategory,
        name: &str,
        extension: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self(format!(
            "uploads/{}/{}-{}{}",
            category.as_str(),
            slugify(name),
            now.timestamp_millis(),
            extension
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key with each path segment percent-encoded, as it appears in URLs and SigV4 requests
    pub fn encoded(&self) -> String {
        self.0
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
