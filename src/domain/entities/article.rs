//! Article title as typed by the user.

use std::fmt;

/// A Wikipedia article title.
///
/// Keeps the title exactly as typed for display and exposes the path form
/// expected by the pageviews API, where spaces are written as underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// The title as typed, used for labels and chart captions.
    pub fn display(&self) -> &str {
        &self.0
    }

    /// The title with every space replaced by an underscore.
    ///
    /// No other character is touched; percent-encoding happens when the
    /// request URL is assembled.
    pub fn path_segment(&self) -> String {
        self.0.replace(' ', "_")
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleTitle {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ArticleTitle {
    fn from(value: String) -> Self {
        Self(value)
    }
}
