// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::Utc;
use talk_store::{Entity, Store};

use crate::domain::rooms::models::{Room, RoomError};
use crate::domain::rooms::repos::RoomsRepository;
use crate::domain::shared::models::{AccountId, RoomId};

/// Rooms repository on top of the transactional store. Every write commits
/// atomically; a failed merge releases its transaction without touching the
/// persisted record.
pub struct StoreRoomsRepository {
    store: Store,
}

impl StoreRoomsRepository {
    pub fn new(store: Store) -> Self {
        StoreRoomsRepository { store }
    }

    fn update(&self, id: &RoomId, block: impl FnOnce(&mut Room)) -> Result<()> {
        let mut tx = self
            .store
            .transaction_for_reading_and_writing(&[Room::collection()])?;
        {
            let mut collection = tx.writeable_collection(Room::collection())?;
            let Some(mut room) = collection.get::<Room>(id)? else {
                return Ok(());
            };
            block(&mut room);
            collection.put(&room)?;
        }
        tx.commit()?;
        Ok(())
    }
}

impl RoomsRepository for StoreRoomsRepository {
    fn get(&self, id: &RoomId) -> Result<Option<Room>> {
        let tx = self.store.transaction_for_reading(&[Room::collection()])?;
        let collection = tx.readable_collection(Room::collection())?;
        Ok(collection.get(id)?)
    }

    fn get_all(&self, account_id: &AccountId) -> Result<Vec<Room>> {
        let tx = self.store.transaction_for_reading(&[Room::collection()])?;
        let collection = tx.readable_collection(Room::collection())?;
        Ok(collection
            .get_all::<Room>()?
            .into_iter()
            .filter(|room| &room.account_id == account_id)
            .collect())
    }

    fn merge(&self, incoming: Room) -> Result<Room, RoomError> {
        let mut tx = self
            .store
            .transaction_for_reading_and_writing(&[Room::collection()])?;
        let merged = {
            let mut collection = tx.writeable_collection(Room::collection())?;
            let existing = collection.get::<Room>(&incoming.id)?;
            let merged = Room::merged_with(existing.as_ref(), incoming, Utc::now().timestamp())?;
            collection.put(&merged)?;
            merged
        };
        tx.commit()?;
        Ok(merged)
    }

    fn set_pending_message(&self, id: &RoomId, message: &str) -> Result<()> {
        self.update(id, |room| room.pending_message = message.to_string())
    }

    fn set_participants(&self, id: &RoomId, participants: Vec<String>) -> Result<()> {
        self.update(id, |room| room.participants = participants)
    }

    fn delete(&self, id: &RoomId) -> Result<()> {
        let mut tx = self
            .store
            .transaction_for_reading_and_writing(&[Room::collection()])?;
        tx.writeable_collection(Room::collection())?.delete(id);
        tx.commit()?;
        Ok(())
    }

    fn delete_all(&self, account_id: &AccountId) -> Result<()> {
        let mut tx = self
            .store
            .transaction_for_reading_and_writing(&[Room::collection()])?;
        {
            let mut collection = tx.writeable_collection(Room::collection())?;
            let ids = collection
                .get_all::<Room>()?
                .into_iter()
                .filter(|room| &room.account_id == account_id)
                .map(|room| room.id)
                .collect::<Vec<_>>();
            for id in &ids {
                collection.delete(id);
            }
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::domain::rooms::models::RoomPayload;

    use super::*;

    fn repo() -> StoreRoomsRepository {
        StoreRoomsRepository::new(Store::open(&[Room::collection()]))
    }

    fn room(account: &str, token: &str) -> Room {
        let payload = RoomPayload::new(
            json!({ "token": token, "lastActivity": 100 })
                .as_object()
                .cloned()
                .unwrap(),
        );
        Room::from_payload(&payload, &AccountId::from(account)).unwrap()
    }

    #[test]
    fn test_merge_commits_and_stamps_last_update() {
        let repo = repo();
        let merged = repo.merge(room("acc1", "abc")).unwrap();
        assert!(merged.last_update > 0);

        let fetched = repo.get(&merged.id).unwrap().unwrap();
        assert_eq!(fetched, merged);
    }

    #[test]
    fn test_stale_merge_leaves_persisted_record_untouched() {
        let repo = repo();

        let mut first = room("acc1", "fed");
        first.remote_server = "https://other.example".to_string();
        first.last_received_proxy_hash = Some("0002-def".into());
        let persisted = repo.merge(first).unwrap();

        let mut stale = room("acc1", "fed");
        stale.remote_server = "https://other.example".to_string();
        stale.last_received_proxy_hash = Some("0001-abc".into());
        stale.display_name = "should not stick".to_string();

        assert!(repo.merge(stale).unwrap_err().is_stale_update());
        assert_eq!(repo.get(&persisted.id).unwrap().unwrap(), persisted);
    }

    #[test]
    fn test_pending_message_survives_merges() {
        let repo = repo();
        let merged = repo.merge(room("acc1", "abc")).unwrap();
        repo.set_pending_message(&merged.id, "draft").unwrap();

        repo.merge(room("acc1", "abc")).unwrap();
        let fetched = repo.get(&merged.id).unwrap().unwrap();
        assert_eq!(fetched.pending_message, "draft");
    }

    #[test]
    fn test_writes_to_unknown_rooms_are_noops() {
        let repo = repo();
        let id = RoomId::new(&AccountId::from("acc1"), "ghost").unwrap();
        repo.set_pending_message(&id, "draft").unwrap();
        assert_eq!(repo.get(&id).unwrap(), None);
    }

    #[test]
    fn test_delete_all_only_affects_one_account() {
        let repo = repo();
        repo.merge(room("acc1", "abc")).unwrap();
        repo.merge(room("acc1", "def")).unwrap();
        let other = repo.merge(room("acc2", "abc")).unwrap();

        repo.delete_all(&AccountId::from("acc1")).unwrap();
        assert_eq!(repo.get_all(&AccountId::from("acc1")).unwrap().len(), 0);
        assert_eq!(repo.get_all(&AccountId::from("acc2")).unwrap(), vec![other]);
    }
}
