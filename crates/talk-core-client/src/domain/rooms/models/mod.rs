// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod attributes;
mod permissions;
mod proxy_hash;
mod room;
mod room_error;
mod room_payload;

pub mod object_type;

pub use attributes::{
    CallRecordingState, ListableScope, LobbyState, MessageExpiration, NotificationLevel,
    ParticipantType, ReadOnlyState, RoomType, SipState,
};
pub use permissions::{effective_permissions, Permissions};
pub use proxy_hash::ProxyHash;
pub use room::Room;
pub use room_error::RoomError;
pub use room_payload::RoomPayload;
