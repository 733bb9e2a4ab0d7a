// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::rooms::models::{Room, RoomError, RoomPayload};
use crate::domain::rooms::repos::RoomsRepository;
use crate::domain::shared::models::AccountId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub merged: usize,
    pub stale: usize,
    pub failed: usize,
}

/// Applies a batch of freshly fetched room payloads to the store.
///
/// Failures are isolated per room: one malformed payload never prevents its
/// siblings from merging.
pub struct RoomsSyncService {
    rooms_repo: Arc<dyn RoomsRepository>,
}

impl RoomsSyncService {
    pub fn new(rooms_repo: Arc<dyn RoomsRepository>) -> Self {
        RoomsSyncService { rooms_repo }
    }

    pub fn apply_fetched_rooms(
        &self,
        account_id: &AccountId,
        payloads: Vec<RoomPayload>,
    ) -> SyncSummary {
        let mut summary = SyncSummary::default();

        for payload in payloads {
            let result = Room::from_payload(&payload, account_id)
                .and_then(|incoming| self.rooms_repo.merge(incoming));

            match result {
                Ok(_) => summary.merged += 1,
                Err(RoomError::StaleUpdate(id)) => {
                    info!(room = %id, "Skipped out-of-order proxied update");
                    summary.stale += 1;
                }
                Err(RoomError::Validation(reason)) => {
                    warn!(account = %account_id, reason = %reason, "Dropped malformed room payload");
                    summary.failed += 1;
                }
                Err(RoomError::Anyhow(err)) => {
                    error!(account = %account_id, "Failed to merge room: {err:#}");
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}
