// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use talk_store::Entity;

use crate::domain::rooms::models::{
    effective_permissions, CallRecordingState, ListableScope, LobbyState, MessageExpiration,
    NotificationLevel, ParticipantType, Permissions, ProxyHash, ReadOnlyState, RoomError,
    RoomPayload, RoomType, SipState,
};
use crate::domain::shared::models::{AccountId, RoomId};

/// One conversation's full state as known to a local account.
///
/// A record is created once via `from_payload` when a room is first observed
/// for an account and only ever changes through `merged_with` afterwards,
/// apart from collaborators writing the client-local fields directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Derived as `accountId@token`, never mutated after creation.
    pub id: RoomId,
    pub account_id: AccountId,
    pub token: String,

    pub name: String,
    pub display_name: String,
    pub description: String,
    pub room_type: RoomType,
    pub has_password: bool,

    pub participant_type: ParticipantType,
    pub attendee_id: i64,
    pub attendee_pin: String,
    pub participant_flags: i64,
    /// The effective, server-resolved permission mask.
    pub permissions: Permissions,
    pub attendee_permissions: Permissions,
    pub call_permissions: Permissions,
    pub default_permissions: Permissions,

    pub is_favorite: bool,
    pub notification_level: NotificationLevel,
    pub notification_calls: bool,
    pub object_type: String,
    pub object_id: String,
    pub read_only_state: ReadOnlyState,
    pub listable: ListableScope,
    pub message_expiration: MessageExpiration,
    pub lobby_state: LobbyState,
    pub lobby_timer: i64,
    pub sip_state: SipState,

    pub can_enable_sip: bool,
    pub can_start_call: bool,
    pub can_leave_conversation: bool,
    pub can_delete_conversation: bool,

    pub has_call: bool,
    pub call_start_time: i64,
    pub call_recording: CallRecordingState,
    pub recording_consent: bool,

    pub unread_messages: i64,
    pub unread_mention: bool,
    pub unread_mention_direct: bool,
    pub last_read_message: i64,
    pub last_common_read_message: i64,
    pub last_activity: i64,
    pub last_message_id: Option<String>,
    /// The last message as an opaque serialized blob, decoded lazily by the
    /// messaging collaborator.
    pub last_message_payload: Option<String>,
    /// Local poll/merge timestamp, written exactly once per successful merge.
    pub last_update: i64,

    pub status: String,
    pub status_icon: String,
    pub status_message: String,
    pub avatar_version: String,
    pub is_custom_avatar: bool,

    pub remote_server: String,
    pub remote_token: String,

    // Client-local state. Never server-authoritative and preserved by merges.
    pub pending_message: String,
    pub participants: Vec<String>,
    pub last_received_proxy_hash: Option<ProxyHash>,
}

impl Entity for Room {
    type Id = RoomId;

    fn id(&self) -> &RoomId {
        &self.id
    }

    fn collection() -> &'static str {
        "rooms"
    }
}

impl Room {
    /// Builds a room from a server-delivered payload. Absent fields fall back
    /// to their documented defaults; only a missing identity fails.
    pub fn from_payload(payload: &RoomPayload, account_id: &AccountId) -> Result<Room, RoomError> {
        let token = payload.string("token");
        let id = RoomId::new(account_id, &token)?;

        let (last_message_id, last_message_payload) = match payload.raw("lastMessage") {
            Some(Value::Object(message)) if !message.is_empty() => {
                let message_id = message.get("id").map(|id| match id {
                    Value::String(value) => value.clone(),
                    other => other.to_string(),
                });
                (message_id, Some(Value::Object(message.clone()).to_string()))
            }
            _ => (None, None),
        };

        Ok(Room {
            id,
            account_id: account_id.clone(),
            token,
            name: payload.string("name"),
            display_name: payload.string("displayName"),
            description: payload.string("description"),
            room_type: RoomType::from(payload.int("type")),
            has_password: payload.bool("hasPassword"),
            participant_type: ParticipantType::from(payload.int("participantType")),
            attendee_id: payload.int("attendeeId"),
            attendee_pin: payload.string("attendeePin"),
            participant_flags: payload.int("participantFlags"),
            permissions: Permissions::from_payload_value(payload.int("permissions")),
            attendee_permissions: Permissions::from_payload_value(
                payload.int("attendeePermissions"),
            ),
            call_permissions: Permissions::from_payload_value(payload.int("callPermissions")),
            default_permissions: Permissions::from_payload_value(payload.int("defaultPermissions")),
            is_favorite: payload.bool("isFavorite"),
            notification_level: NotificationLevel::from(payload.int("notificationLevel")),
            notification_calls: payload.bool("notificationCalls"),
            object_type: payload.string("objectType"),
            object_id: payload.string("objectId"),
            read_only_state: ReadOnlyState::from(payload.int("readOnlyState")),
            listable: ListableScope::from(payload.int("listable")),
            message_expiration: MessageExpiration::from(payload.int("messageExpiration")),
            lobby_state: LobbyState::from(payload.int("lobbyState")),
            lobby_timer: payload.int("lobbyTimer"),
            sip_state: SipState::from(payload.int("sipState")),
            can_enable_sip: payload.bool("canEnableSIP"),
            can_start_call: payload.bool("canStartCall"),
            can_leave_conversation: payload.bool("canLeaveConversation"),
            can_delete_conversation: payload.bool("canDeleteConversation"),
            has_call: payload.bool("hasCall"),
            call_start_time: payload.int("callStartTime"),
            call_recording: CallRecordingState::from(payload.int("callRecording")),
            recording_consent: payload.bool("recordingConsent"),
            unread_messages: payload.int("unreadMessages"),
            unread_mention: payload.bool("unreadMention"),
            unread_mention_direct: payload.bool("unreadMentionDirect"),
            last_read_message: payload.int("lastReadMessage"),
            last_common_read_message: payload.int("lastCommonReadMessage"),
            last_activity: payload.int("lastActivity"),
            last_message_id,
            last_message_payload,
            last_update: 0,
            status: payload.string("status"),
            status_icon: payload.string("statusIcon"),
            status_message: payload.string("statusMessage"),
            avatar_version: payload.string("avatarVersion"),
            is_custom_avatar: payload.bool("isCustomAvatar"),
            remote_server: payload.string("remoteServer"),
            remote_token: payload.string("remoteToken"),
            pending_message: String::new(),
            participants: payload.strings("participants"),
            last_received_proxy_hash: payload.opt_string("lastReceivedProxyHash").map(Into::into),
        })
    }

    /// Merges a freshly fetched room into the persisted state of the same
    /// room.
    ///
    /// Server-owned fields are overwritten unconditionally; client-local
    /// fields survive unless the incoming entity explicitly carries a
    /// non-default value for them. For federated rooms an out-of-order
    /// proxied update is rejected with `StaleUpdate` and the existing state
    /// stays untouched.
    ///
    /// The function is pure over its inputs; `now` is the timestamp recorded
    /// as `last_update` on success.
    pub fn merged_with(
        existing: Option<&Room>,
        incoming: Room,
        now: i64,
    ) -> Result<Room, RoomError> {
        let Some(existing) = existing else {
            let mut room = incoming;
            room.last_update = now;
            return Ok(room);
        };

        if existing.id != incoming.id {
            return Err(RoomError::Validation(format!(
                "cannot merge {} into {}",
                incoming.id, existing.id
            )));
        }

        if !existing.remote_server.is_empty() {
            if let (Some(recorded), Some(received)) = (
                &existing.last_received_proxy_hash,
                &incoming.last_received_proxy_hash,
            ) {
                if received <= recorded {
                    return Err(RoomError::StaleUpdate(existing.id.clone()));
                }
            }
        }

        let mut room = incoming;
        room.pending_message = existing.pending_message.clone();
        if room.participants.is_empty() {
            room.participants = existing.participants.clone();
        }
        // The recorded hash only ever advances, federated or not.
        if let Some(recorded) = &existing.last_received_proxy_hash {
            match &room.last_received_proxy_hash {
                Some(received) if received > recorded => {}
                _ => room.last_received_proxy_hash = Some(recorded.clone()),
            }
        }
        room.last_update = now;
        Ok(room)
    }
}

impl Room {
    pub fn effective_permissions(&self) -> Permissions {
        effective_permissions(
            self.default_permissions,
            self.attendee_permissions,
            self.call_permissions,
        )
    }

    pub fn can_join_call(&self) -> bool {
        self.effective_permissions().contains(Permissions::JOIN_CALL)
    }

    /// Bit test on the resolved mask, as opposed to the stored server flag
    /// `can_start_call`.
    pub fn has_start_call_permission(&self) -> bool {
        self.effective_permissions()
            .contains(Permissions::START_CALL)
    }

    pub fn can_ignore_lobby(&self) -> bool {
        self.effective_permissions()
            .contains(Permissions::IGNORE_LOBBY)
    }

    pub fn can_publish_audio(&self) -> bool {
        self.effective_permissions()
            .contains(Permissions::PUBLISH_AUDIO)
    }

    pub fn can_publish_video(&self) -> bool {
        self.effective_permissions()
            .contains(Permissions::PUBLISH_VIDEO)
    }

    pub fn can_publish_screen(&self) -> bool {
        self.effective_permissions()
            .contains(Permissions::PUBLISH_SCREEN)
    }

    pub fn can_chat(&self) -> bool {
        self.effective_permissions().contains(Permissions::CHAT)
    }

    pub fn is_federated(&self) -> bool {
        !self.remote_server.is_empty()
    }

    pub fn is_lobby_restricted(&self) -> bool {
        self.lobby_state == LobbyState::ModeratorsOnly
            && !self.participant_type.is_moderator()
            && !self.can_ignore_lobby()
    }
}
