//! Visited link record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A visited page
///
/// The URL is the identity: two links with the same URL are equal no
/// matter how long each visit took to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    /// Page load time in seconds
    pub loading_time: u32,
}

impl Link {
    pub fn new(url: impl Into<String>, loading_time: u32) -> Self {
        Self {
            url: url.into(),
            loading_time,
        }
    }

    /// Case-insensitive substring match against the URL
    pub fn url_contains(&self, needle: &str) -> bool {
        self.url.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Link {}

impl Hash for Link {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-- {} {}s", self.url, self.loading_time)
    }
}
