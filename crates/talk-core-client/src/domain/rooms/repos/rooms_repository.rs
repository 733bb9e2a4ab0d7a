// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use crate::domain::rooms::models::{Room, RoomError};
use crate::domain::shared::models::{AccountId, RoomId};

/// The persisted room store, one record per `RoomId`.
///
/// Reads may run concurrently from any thread; all writes for one room
/// commit atomically, so readers never observe a partially merged record.
pub trait RoomsRepository: Send + Sync {
    fn get(&self, id: &RoomId) -> Result<Option<Room>>;

    fn get_all(&self, account_id: &AccountId) -> Result<Vec<Room>>;

    /// Reconciles a freshly fetched room with the persisted state of the
    /// same room inside a single write transaction and returns the committed
    /// record. A `StaleUpdate` leaves the persisted record untouched.
    fn merge(&self, incoming: Room) -> Result<Room, RoomError>;

    /// Stores an unsent draft. A no-op when the room is unknown.
    fn set_pending_message(&self, id: &RoomId, message: &str) -> Result<()>;

    /// Replaces the locally cached roster, typically after a dedicated
    /// participants fetch.
    fn set_participants(&self, id: &RoomId, participants: Vec<String>) -> Result<()>;

    /// Removes a room the server reported as deleted or left.
    fn delete(&self, id: &RoomId) -> Result<()>;

    /// Removes every room of an account, invoked on account removal.
    fn delete_all(&self, account_id: &AccountId) -> Result<()>;
}
