// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};
use talk_store::KeyType;

use super::AccountId;

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("invalid room identity: {0}")]
pub struct InvalidRoomId(pub String);

/// The stable primary key of a room record, derived as `accountId@token`.
///
/// The id is computed once when a room is first observed for an account and
/// never changes afterwards, even when the server-assigned token rotates for
/// federated rooms.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(account_id: &AccountId, token: &str) -> Result<Self, InvalidRoomId> {
        if account_id.is_empty() {
            return Err(InvalidRoomId("empty account id".to_string()));
        }
        if token.is_empty() {
            return Err(InvalidRoomId("empty room token".to_string()));
        }
        Ok(RoomId(format!("{}@{}", account_id, token)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for RoomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoomId({})", self.0)
    }
}

impl Display for RoomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl KeyType for RoomId {
    fn to_raw_key(&self) -> String {
        self.0.clone()
    }
}
