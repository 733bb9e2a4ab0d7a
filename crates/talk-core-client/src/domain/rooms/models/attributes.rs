// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

// All enumerated room attributes decode defensively. A payload value outside
// the documented range maps to the attribute's default instead of failing, so
// one malformed server field cannot corrupt the whole record. The numeric
// representations match the wire encoding exactly.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum RoomType {
    #[default]
    OneToOne,
    Group,
    Public,
    Changelog,
    FormerOneToOne,
    NoteToSelf,
}

impl From<i64> for RoomType {
    fn from(value: i64) -> Self {
        match value {
            1 => RoomType::OneToOne,
            2 => RoomType::Group,
            3 => RoomType::Public,
            4 => RoomType::Changelog,
            5 => RoomType::FormerOneToOne,
            6 => RoomType::NoteToSelf,
            _ => RoomType::default(),
        }
    }
}

impl From<RoomType> for i64 {
    fn from(value: RoomType) -> Self {
        match value {
            RoomType::OneToOne => 1,
            RoomType::Group => 2,
            RoomType::Public => 3,
            RoomType::Changelog => 4,
            RoomType::FormerOneToOne => 5,
            RoomType::NoteToSelf => 6,
        }
    }
}

impl Display for RoomType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomType::OneToOne => write!(f, "One-to-one"),
            RoomType::Group => write!(f, "Group"),
            RoomType::Public => write!(f, "Public"),
            RoomType::Changelog => write!(f, "Changelog"),
            RoomType::FormerOneToOne => write!(f, "Former one-to-one"),
            RoomType::NoteToSelf => write!(f, "Note to self"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ParticipantType {
    Owner,
    Moderator,
    #[default]
    User,
    Guest,
    UserSelfJoined,
    GuestModerator,
}

impl From<i64> for ParticipantType {
    fn from(value: i64) -> Self {
        match value {
            1 => ParticipantType::Owner,
            2 => ParticipantType::Moderator,
            3 => ParticipantType::User,
            4 => ParticipantType::Guest,
            5 => ParticipantType::UserSelfJoined,
            6 => ParticipantType::GuestModerator,
            _ => ParticipantType::default(),
        }
    }
}

impl From<ParticipantType> for i64 {
    fn from(value: ParticipantType) -> Self {
        match value {
            ParticipantType::Owner => 1,
            ParticipantType::Moderator => 2,
            ParticipantType::User => 3,
            ParticipantType::Guest => 4,
            ParticipantType::UserSelfJoined => 5,
            ParticipantType::GuestModerator => 6,
        }
    }
}

impl ParticipantType {
    pub fn is_moderator(&self) -> bool {
        matches!(
            self,
            ParticipantType::Owner | ParticipantType::Moderator | ParticipantType::GuestModerator
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum NotificationLevel {
    #[default]
    Default,
    Always,
    Mention,
    Never,
}

impl From<i64> for NotificationLevel {
    fn from(value: i64) -> Self {
        match value {
            0 => NotificationLevel::Default,
            1 => NotificationLevel::Always,
            2 => NotificationLevel::Mention,
            3 => NotificationLevel::Never,
            _ => NotificationLevel::default(),
        }
    }
}

impl From<NotificationLevel> for i64 {
    fn from(value: NotificationLevel) -> Self {
        match value {
            NotificationLevel::Default => 0,
            NotificationLevel::Always => 1,
            NotificationLevel::Mention => 2,
            NotificationLevel::Never => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ReadOnlyState {
    #[default]
    ReadWrite,
    ReadOnly,
}

impl From<i64> for ReadOnlyState {
    fn from(value: i64) -> Self {
        match value {
            0 => ReadOnlyState::ReadWrite,
            1 => ReadOnlyState::ReadOnly,
            _ => ReadOnlyState::default(),
        }
    }
}

impl From<ReadOnlyState> for i64 {
    fn from(value: ReadOnlyState) -> Self {
        match value {
            ReadOnlyState::ReadWrite => 0,
            ReadOnlyState::ReadOnly => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ListableScope {
    #[default]
    ParticipantsOnly,
    RegularUsersOnly,
    Everyone,
}

impl From<i64> for ListableScope {
    fn from(value: i64) -> Self {
        match value {
            0 => ListableScope::ParticipantsOnly,
            1 => ListableScope::RegularUsersOnly,
            2 => ListableScope::Everyone,
            _ => ListableScope::default(),
        }
    }
}

impl From<ListableScope> for i64 {
    fn from(value: ListableScope) -> Self {
        match value {
            ListableScope::ParticipantsOnly => 0,
            ListableScope::RegularUsersOnly => 1,
            ListableScope::Everyone => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum LobbyState {
    #[default]
    AllParticipants,
    ModeratorsOnly,
}

impl From<i64> for LobbyState {
    fn from(value: i64) -> Self {
        match value {
            0 => LobbyState::AllParticipants,
            1 => LobbyState::ModeratorsOnly,
            _ => LobbyState::default(),
        }
    }
}

impl From<LobbyState> for i64 {
    fn from(value: LobbyState) -> Self {
        match value {
            LobbyState::AllParticipants => 0,
            LobbyState::ModeratorsOnly => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum SipState {
    #[default]
    Disabled,
    Enabled,
    EnabledWithoutPin,
}

impl From<i64> for SipState {
    fn from(value: i64) -> Self {
        match value {
            0 => SipState::Disabled,
            1 => SipState::Enabled,
            2 => SipState::EnabledWithoutPin,
            _ => SipState::default(),
        }
    }
}

impl From<SipState> for i64 {
    fn from(value: SipState) -> Self {
        match value {
            SipState::Disabled => 0,
            SipState::Enabled => 1,
            SipState::EnabledWithoutPin => 2,
        }
    }
}

/// Message expiration policies, encoded as their duration in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum MessageExpiration {
    #[default]
    Off,
    OneHour,
    EightHours,
    OneDay,
    OneWeek,
    FourWeeks,
}

impl From<i64> for MessageExpiration {
    fn from(value: i64) -> Self {
        match value {
            0 => MessageExpiration::Off,
            3600 => MessageExpiration::OneHour,
            28800 => MessageExpiration::EightHours,
            86400 => MessageExpiration::OneDay,
            604800 => MessageExpiration::OneWeek,
            2419200 => MessageExpiration::FourWeeks,
            _ => MessageExpiration::default(),
        }
    }
}

impl From<MessageExpiration> for i64 {
    fn from(value: MessageExpiration) -> Self {
        match value {
            MessageExpiration::Off => 0,
            MessageExpiration::OneHour => 3600,
            MessageExpiration::EightHours => 28800,
            MessageExpiration::OneDay => 86400,
            MessageExpiration::OneWeek => 604800,
            MessageExpiration::FourWeeks => 2419200,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum CallRecordingState {
    #[default]
    Stopped,
    VideoRunning,
    AudioRunning,
    VideoStarting,
    AudioStarting,
    Failed,
}

impl From<i64> for CallRecordingState {
    fn from(value: i64) -> Self {
        match value {
            0 => CallRecordingState::Stopped,
            1 => CallRecordingState::VideoRunning,
            2 => CallRecordingState::AudioRunning,
            3 => CallRecordingState::VideoStarting,
            4 => CallRecordingState::AudioStarting,
            5 => CallRecordingState::Failed,
            _ => CallRecordingState::default(),
        }
    }
}

impl From<CallRecordingState> for i64 {
    fn from(value: CallRecordingState) -> Self {
        match value {
            CallRecordingState::Stopped => 0,
            CallRecordingState::VideoRunning => 1,
            CallRecordingState::AudioRunning => 2,
            CallRecordingState::VideoStarting => 3,
            CallRecordingState::AudioStarting => 4,
            CallRecordingState::Failed => 5,
        }
    }
}

impl CallRecordingState {
    pub fn is_running(&self) -> bool {
        matches!(
            self,
            CallRecordingState::VideoRunning | CallRecordingState::AudioRunning
        )
    }
}
