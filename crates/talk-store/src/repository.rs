// talk-core-client/talk-store
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A value that can act as the primary key of an `Entity`.
pub trait KeyType: Send + Sync {
    fn to_raw_key(&self) -> String;
}

impl KeyType for String {
    fn to_raw_key(&self) -> String {
        self.clone()
    }
}

impl KeyType for str {
    fn to_raw_key(&self) -> String {
        self.to_string()
    }
}

impl KeyType for &str {
    fn to_raw_key(&self) -> String {
        self.to_string()
    }
}

/// A record that lives in one of the store's collections, keyed by its id.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    type Id: KeyType;

    fn id(&self) -> &Self::Id;
    fn collection() -> &'static str;
}
