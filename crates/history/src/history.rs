//! Browser history - most recently visited link first
//!
//! Backed by a `VecDeque`: the front is the latest visit, the back the
//! oldest. Note the end each delete targets:
//!
//! - `delete_first` drops the **oldest** visit (back)
//! - `delete_last` drops the **latest** visit (front)

use crate::error::{HistoryError, Result};
use crate::link::Link;
use std::collections::VecDeque;
use std::fmt;

/// Rendered by `view_history` when nothing has been visited
pub const EMPTY_HISTORY_MESSAGE: &str = "Browser history is empty!";

#[derive(Debug, Clone, Default)]
pub struct BrowserHistory {
    links: VecDeque<Link>,
}

impl BrowserHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit; it becomes the most recent entry
    pub fn open(&mut self, link: Link) {
        tracing::debug!(url = %link.url, "Opened link");
        self.links.push_front(link);
    }

    pub fn last_visited(&self) -> Result<&Link> {
        self.links.front().ok_or(HistoryError::EmptyCollection)
    }

    /// Remove and return the oldest visit
    pub fn delete_first(&mut self) -> Result<Link> {
        let link = self.links.pop_back().ok_or(HistoryError::EmptyCollection)?;
        tracing::debug!(url = %link.url, "Deleted oldest link");
        Ok(link)
    }

    /// Remove and return the most recent visit
    pub fn delete_last(&mut self) -> Result<Link> {
        let link = self.links.pop_front().ok_or(HistoryError::EmptyCollection)?;
        tracing::debug!(url = %link.url, "Deleted latest link");
        Ok(link)
    }

    /// Most recent visit with exactly this URL
    pub fn get_by_url(&self, url: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.url == url)
    }

    /// Drop every link whose URL contains `pattern`, ignoring case
    ///
    /// Fails with `NoMatches` when nothing was removed, which includes
    /// calling it on an empty history.
    pub fn remove_links(&mut self, pattern: &str) -> Result<usize> {
        let before = self.links.len();
        self.links.retain(|link| !link.url_contains(pattern));

        let removed = before - self.links.len();
        if removed == 0 {
            return Err(HistoryError::NoMatches(pattern.to_string()));
        }

        tracing::debug!(pattern, removed, "Removed matching links");
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.links.clear();
    }

    pub fn contains(&self, link: &Link) -> bool {
        self.links.contains(link)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Latest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    /// Owned snapshot, latest to oldest
    pub fn to_vec(&self) -> Vec<Link> {
        self.links.iter().cloned().collect()
    }

    /// One line per visit, latest first
    pub fn view_history(&self) -> String {
        if self.links.is_empty() {
            return EMPTY_HISTORY_MESSAGE.to_string();
        }

        let mut output = String::new();
        for link in &self.links {
            output.push_str(&link.to_string());
            output.push('\n');
        }
        output
    }
}

impl fmt::Display for BrowserHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.view_history())
    }
}

impl Extend<Link> for BrowserHistory {
    /// Opens each link in order, so the last one ends up most recent
    fn extend<I: IntoIterator<Item = Link>>(&mut self, iter: I) {
        for link in iter {
            self.open(link);
        }
    }
}

impl FromIterator<Link> for BrowserHistory {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        let mut history = Self::new();
        history.extend(iter);
        history
    }
}

impl<'a> IntoIterator for &'a BrowserHistory {
    type Item = &'a Link;
    type IntoIter = std::collections::vec_deque::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    fn sample() -> BrowserHistory {
        [
            Link::new("https://softuni.bg", 3),
            Link::new("https://judge.softuni.bg", 5),
            Link::new("https://GitHub.com/rust-lang", 2),
            Link::new("https://docs.rs", 1),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_last_visited_is_most_recent_open() {
        let mut history = BrowserHistory::new();
        for (i, url) in ["a.com", "b.com", "c.com"].into_iter().enumerate() {
            history.open(Link::new(url, i as u32));
            assert_eq!(history.last_visited().unwrap().url, url);
        }
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_empty_history_errors() {
        let mut history = BrowserHistory::new();
        assert_eq!(history.last_visited(), Err(HistoryError::EmptyCollection));
        assert_eq!(history.delete_first(), Err(HistoryError::EmptyCollection));
        assert_eq!(history.delete_last(), Err(HistoryError::EmptyCollection));
    }

    #[test]
    fn test_delete_ends() {
        let mut history = sample();

        assert_eq!(history.delete_first().unwrap().url, "https://softuni.bg");
        assert_eq!(history.delete_last().unwrap().url, "https://docs.rs");
        assert_eq!(history.len(), 2);
        assert_eq!(history.last_visited().unwrap().url, "https://GitHub.com/rust-lang");
    }

    #[test]
    fn test_get_by_url() {
        let history = sample();
        assert_eq!(history.get_by_url("https://docs.rs").unwrap().loading_time, 1);
        assert!(history.get_by_url("https://DOCS.rs").is_none());
        assert!(history.get_by_url("docs.rs").is_none());
    }

    #[test]
    fn test_remove_links_counts_case_insensitive_matches() {
        init_tracing();
        let mut history = sample();

        assert_eq!(history.remove_links("SOFTUNI").unwrap(), 2);
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|link| !link.url_contains("softuni")));

        assert_eq!(history.remove_links("github").unwrap(), 1);
        assert_eq!(history.to_vec(), vec![Link::new("https://docs.rs", 1)]);
    }

    #[test]
    fn test_remove_links_without_matches() {
        let mut history = sample();
        assert_eq!(
            history.remove_links("xyz"),
            Err(HistoryError::NoMatches("xyz".to_string()))
        );
        assert_eq!(history.len(), 4);

        let mut empty = BrowserHistory::new();
        assert!(matches!(
            empty.remove_links("anything"),
            Err(HistoryError::NoMatches(_))
        ));
    }

    #[test]
    fn test_contains_and_clear() {
        let mut history = sample();
        assert!(history.contains(&Link::new("https://docs.rs", 99)));
        assert!(!history.contains(&Link::new("https://crates.io", 1)));

        history.clear();
        assert!(history.is_empty());
        assert!(!history.contains(&Link::new("https://docs.rs", 1)));
    }

    #[test]
    fn test_order_is_latest_first() {
        let history = sample();
        let urls: Vec<_> = (&history).into_iter().map(|link| link.url.as_str()).collect();

        assert_eq!(
            urls,
            vec![
                "https://docs.rs",
                "https://GitHub.com/rust-lang",
                "https://judge.softuni.bg",
                "https://softuni.bg"
            ]
        );
    }

    #[test]
    fn test_view_history() {
        assert_eq!(BrowserHistory::new().view_history(), EMPTY_HISTORY_MESSAGE);

        let mut history = BrowserHistory::new();
        history.open(Link::new("a.com", 1));
        history.open(Link::new("b.com", 2));

        assert_eq!(history.view_history(), "-- b.com 2s\n-- a.com 1s\n");
        assert_eq!(history.to_string(), history.view_history());
    }
}
