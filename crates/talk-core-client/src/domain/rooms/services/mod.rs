// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod rooms_sync_service;

pub use rooms_sync_service::{RoomsSyncService, SyncSummary};
