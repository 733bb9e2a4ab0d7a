// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{InvalidRoomId, RoomId};

#[derive(thiserror::Error, Debug)]
pub enum RoomError {
    /// The payload carried a malformed or missing identity. Fatal for that
    /// single payload, never for its siblings in a batch.
    #[error("invalid room identity: {0}")]
    Validation(String),
    /// The anti-regression guard rejected an out-of-order proxied update.
    /// The persisted record is retained unchanged.
    #[error("stale update rejected for room {0}")]
    StaleUpdate(RoomId),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl RoomError {
    pub fn is_stale_update(&self) -> bool {
        matches!(self, RoomError::StaleUpdate(_))
    }
}

impl From<InvalidRoomId> for RoomError {
    fn from(error: InvalidRoomId) -> Self {
        RoomError::Validation(error.0)
    }
}

impl From<talk_store::StoreError> for RoomError {
    fn from(error: talk_store::StoreError) -> Self {
        RoomError::Anyhow(error.into())
    }
}
