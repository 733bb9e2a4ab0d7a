// talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod room_sync;

use std::sync::Arc;

use serde_json::Value;
use talk_core_client::{
    AccountId, Room, RoomPayload, RoomsSyncService, StoreRoomsRepository,
};
use talk_store::{Entity, Store};

pub fn payload(value: Value) -> RoomPayload {
    RoomPayload::new(value.as_object().cloned().unwrap_or_default())
}

pub fn account(id: &str) -> AccountId {
    AccountId::from(id)
}

pub struct TestClient {
    pub repo: Arc<StoreRoomsRepository>,
    pub sync: RoomsSyncService,
}

impl TestClient {
    pub fn new() -> Self {
        let store = Store::open(&[Room::collection()]);
        let repo = Arc::new(StoreRoomsRepository::new(store));
        TestClient {
            sync: RoomsSyncService::new(repo.clone()),
            repo,
        }
    }
}
