// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod domain;
pub mod infra;

pub use domain::rooms::models::{Permissions, Room, RoomError, RoomPayload};
pub use domain::rooms::repos::RoomsRepository;
pub use domain::rooms::services::{RoomsSyncService, SyncSummary};
pub use domain::shared::models::{AccountId, RoomId};
pub use infra::rooms::StoreRoomsRepository;
