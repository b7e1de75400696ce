//! The built selector expression and its DOM query renderings.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// A complete XPath selector expression, ready to hand to a browser
/// automation driver.
///
/// The wrapped string is the only state; the driver consuming it is an
/// opaque collaborator. [`to_query`](Self::to_query) and
/// [`to_count_query`](Self::to_count_query) render the expression into
/// `document.evaluate` JavaScript for drivers that evaluate script in the
/// page instead of accepting XPath directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct XPath(String);

impl XPath {
    /// Wraps a composed selector expression.
    #[must_use]
    pub fn new(expr: impl Into<String>) -> Self {
        let expr = expr.into();
        trace!(xpath = %expr, "built selector");
        Self(expr)
    }

    /// The selector as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the selector, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Renders a JavaScript expression resolving to the first matching
    /// node.
    #[must_use]
    pub fn to_query(&self) -> String {
        format!(
            "document.evaluate({:?}, document, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue",
            self.0
        )
    }

    /// Renders a JavaScript expression resolving to the number of matching
    /// nodes.
    #[must_use]
    pub fn to_count_query(&self) -> String {
        format!(
            "document.evaluate({:?}, document, null, XPathResult.ORDERED_NODE_SNAPSHOT_TYPE, null).snapshotLength",
            self.0
        )
    }
}

impl fmt::Display for XPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for XPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for XPath {
    fn from(expr: String) -> Self {
        Self::new(expr)
    }
}

impl From<&str> for XPath {
    fn from(expr: &str) -> Self {
        Self::new(expr)
    }
}

impl PartialEq<str> for XPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for XPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
