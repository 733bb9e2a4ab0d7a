// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// An opaque marker ordering proxied updates for rooms hosted on a federated
/// server. The emitting proxy prefixes a monotonic counter, so lexicographic
/// order follows event order.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProxyHash(String);

impl ProxyHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProxyHash {
    fn from(value: String) -> Self {
        ProxyHash(value)
    }
}

impl From<&str> for ProxyHash {
    fn from(value: &str) -> Self {
        ProxyHash(value.to_string())
    }
}

impl Debug for ProxyHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProxyHash({})", self.0)
    }
}

impl Display for ProxyHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
