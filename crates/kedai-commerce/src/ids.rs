//! Product identifiers as accepted by the catalog API.
//!
//! The remote API keys products by integer id, but callers may pass any
//! string (a route parameter, user input). Both forms are carried so the
//! server, not this crate, decides whether the product exists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier used to look up a single product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductKey {
    /// Numeric product id.
    Id(u64),
    /// Arbitrary identifier text, sent as-is.
    Raw(String),
}

impl ProductKey {
    /// The key as a single URL path segment, percent-encoded.
    ///
    /// `None` for `""`, `.` and `..`: URL normalization resolves those
    /// against the parent path, so no request could name them.
    pub fn path_segment(&self) -> Option<String> {
        match self {
            ProductKey::Id(id) => Some(id.to_string()),
            ProductKey::Raw(raw) if matches!(raw.as_str(), "" | "." | "..") => None,
            ProductKey::Raw(raw) => Some(urlencoding::encode(raw).into_owned()),
        }
    }

    /// The numeric id, if this key is one.
    pub fn as_id(&self) -> Option<u64> {
        match self {
            ProductKey::Id(id) => Some(*id),
            ProductKey::Raw(_) => None,
        }
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKey::Id(id) => write!(f, "{}", id),
            ProductKey::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

impl From<u64> for ProductKey {
    fn from(id: u64) -> Self {
        ProductKey::Id(id)
    }
}

impl From<String> for ProductKey {
    fn from(s: String) -> Self {
        ProductKey::Raw(s)
    }
}

impl From<&str> for ProductKey {
    fn from(s: &str) -> Self {
        ProductKey::Raw(s.to_string())
    }
}
