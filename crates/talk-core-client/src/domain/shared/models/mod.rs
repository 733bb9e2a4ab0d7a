// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod account_id;
mod room_id;

pub use account_id::AccountId;
pub use room_id::{InvalidRoomId, RoomId};
