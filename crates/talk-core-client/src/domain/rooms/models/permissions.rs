// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use bitflags::bitflags;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

bitflags! {
    /// A layered permission mask. The empty mask means "Default", i.e. no
    /// custom bits are set and the value inherits from the next layer down.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Permissions: u32 {
        const CUSTOM = 1;
        const START_CALL = 2;
        const JOIN_CALL = 4;
        const IGNORE_LOBBY = 8;
        const PUBLISH_AUDIO = 16;
        const PUBLISH_VIDEO = 32;
        const PUBLISH_SCREEN = 64;
        const CHAT = 128;
    }
}

impl Permissions {
    /// Decodes a raw payload value. Negative values and bits outside the
    /// documented set are ignored, never rejected.
    pub fn from_payload_value(value: i64) -> Self {
        Permissions::from_bits_truncate(value.max(0) as u32)
    }

    pub fn is_default(&self) -> bool {
        self.is_empty()
    }
}

/// Resolves the effective permission mask from the three layered masks the
/// server delivers.
///
/// An attendee-level mask carrying the `CUSTOM` bit overrides everything
/// else. Otherwise call permissions only ever add capabilities on top of the
/// conversation defaults. `CUSTOM` is a marker, not a capability, and never
/// appears in the resolved mask.
pub fn effective_permissions(
    default_permissions: Permissions,
    attendee_permissions: Permissions,
    call_permissions: Permissions,
) -> Permissions {
    if attendee_permissions.contains(Permissions::CUSTOM) {
        return attendee_permissions - Permissions::CUSTOM;
    }
    (default_permissions | call_permissions) - Permissions::CUSTOM
}

// Persisted and exchanged as the raw bit value to stay compatible with the
// server's encoding.

impl Serialize for Permissions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        Ok(Permissions::from_bits_truncate(bits))
    }
}
