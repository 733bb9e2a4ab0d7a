// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

//! Object types attaching semantic meaning to a room via its
//! `object_type`/`object_id` pair.

/// The room was created for a shared file.
pub const FILE: &str = "file";
/// The room protects a password share.
pub const SHARE_PASSWORD: &str = "share:password";
/// The room is linked to another room.
pub const ROOM: &str = "room";
