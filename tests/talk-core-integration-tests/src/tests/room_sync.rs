// talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use pretty_assertions::assert_eq;
use serde_json::json;

use talk_core_client::domain::rooms::models::{Permissions, ReadOnlyState};
use talk_core_client::{RoomId, RoomsRepository, SyncSummary};

use super::{account, payload, TestClient};

#[test]
fn test_initial_sync_then_refresh() -> anyhow::Result<()> {
    let client = TestClient::new();
    let acc = account("alice@talk.example");

    let summary = client.sync.apply_fetched_rooms(
        &acc,
        vec![
            payload(json!({
                "token": "team",
                "displayName": "Team",
                "type": 2,
                "lastActivity": 100,
                "unreadMessages": 5
            })),
            payload(json!({
                "token": "bob",
                "displayName": "Bob",
                "type": 1,
                "lastActivity": 90
            })),
        ],
    );
    assert_eq!(
        summary,
        SyncSummary {
            merged: 2,
            stale: 0,
            failed: 0
        }
    );

    let id = RoomId::new(&acc, "team")?;
    let room = client.repo.get(&id)?.unwrap();
    assert_eq!(room.display_name, "Team");
    assert_eq!(room.unread_messages, 5);
    assert!(room.last_update > 0);

    // The server is the source of truth for its fields on refresh.
    client.sync.apply_fetched_rooms(
        &acc,
        vec![payload(json!({
            "token": "team",
            "displayName": "Team (renamed)",
            "type": 2,
            "lastActivity": 200,
            "unreadMessages": 0,
            "readOnlyState": 1
        }))],
    );

    let room = client.repo.get(&id)?.unwrap();
    assert_eq!(room.display_name, "Team (renamed)");
    assert_eq!(room.unread_messages, 0);
    assert_eq!(room.last_activity, 200);
    assert_eq!(room.read_only_state, ReadOnlyState::ReadOnly);
    assert_eq!(client.repo.get_all(&acc)?.len(), 2);
    Ok(())
}

#[test]
fn test_draft_and_roster_survive_refresh() -> anyhow::Result<()> {
    let client = TestClient::new();
    let acc = account("alice@talk.example");
    let room_payload = json!({ "token": "team", "type": 2 });

    client
        .sync
        .apply_fetched_rooms(&acc, vec![payload(room_payload.clone())]);

    let id = RoomId::new(&acc, "team")?;
    client.repo.set_pending_message(&id, "still typing…")?;
    client
        .repo
        .set_participants(&id, vec!["alice".to_string(), "bob".to_string()])?;

    client
        .sync
        .apply_fetched_rooms(&acc, vec![payload(room_payload)]);

    let room = client.repo.get(&id)?.unwrap();
    assert_eq!(room.pending_message, "still typing…");
    assert_eq!(room.participants, vec!["alice", "bob"]);

    // A payload carrying a fresh roster replaces the cached one.
    client.sync.apply_fetched_rooms(
        &acc,
        vec![payload(json!({
            "token": "team",
            "type": 2,
            "participants": ["alice", "bob", "carol"]
        }))],
    );
    let room = client.repo.get(&id)?.unwrap();
    assert_eq!(room.participants, vec!["alice", "bob", "carol"]);
    assert_eq!(room.pending_message, "still typing…");
    Ok(())
}

#[test]
fn test_federated_rooms_ignore_replayed_proxy_events() -> anyhow::Result<()> {
    let client = TestClient::new();
    let acc = account("alice@talk.example");

    let newer = payload(json!({
        "token": "fed",
        "displayName": "Federated",
        "remoteServer": "https://other.example",
        "remoteToken": "remote-fed",
        "lastReceivedProxyHash": "0002-def",
        "unreadMessages": 2
    }));
    let replayed = payload(json!({
        "token": "fed",
        "displayName": "Federated (old)",
        "remoteServer": "https://other.example",
        "remoteToken": "remote-fed",
        "lastReceivedProxyHash": "0001-abc",
        "unreadMessages": 7
    }));

    let summary = client
        .sync
        .apply_fetched_rooms(&acc, vec![newer, replayed]);
    assert_eq!(
        summary,
        SyncSummary {
            merged: 1,
            stale: 1,
            failed: 0
        }
    );

    let room = client.repo.get(&RoomId::new(&acc, "fed")?)?.unwrap();
    assert_eq!(room.display_name, "Federated");
    assert_eq!(room.unread_messages, 2);
    Ok(())
}

#[test]
fn test_rotated_federated_token_creates_a_fresh_record() -> anyhow::Result<()> {
    let client = TestClient::new();
    let acc = account("alice@talk.example");

    client.sync.apply_fetched_rooms(
        &acc,
        vec![payload(json!({
            "token": "fed-1",
            "remoteServer": "https://other.example",
            "remoteToken": "remote-fed",
            "lastReceivedProxyHash": "0001-abc"
        }))],
    );

    // The remote server rotated the local token for the same remote room.
    // Without a remote-token index the new token is a new record; the old
    // one stays behind until its deletion is reported.
    let summary = client.sync.apply_fetched_rooms(
        &acc,
        vec![payload(json!({
            "token": "fed-2",
            "remoteServer": "https://other.example",
            "remoteToken": "remote-fed",
            "lastReceivedProxyHash": "0002-def"
        }))],
    );
    assert_eq!(
        summary,
        SyncSummary {
            merged: 1,
            stale: 0,
            failed: 0
        }
    );

    let old = client.repo.get(&RoomId::new(&acc, "fed-1")?)?.unwrap();
    let new = client.repo.get(&RoomId::new(&acc, "fed-2")?)?.unwrap();
    assert_eq!(old.remote_token, "remote-fed");
    assert_eq!(new.remote_token, "remote-fed");
    assert_eq!(client.repo.get_all(&acc)?.len(), 2);
    Ok(())
}

#[test]
fn test_accounts_are_isolated() -> anyhow::Result<()> {
    let client = TestClient::new();
    let alice = account("alice@talk.example");
    let bob = account("bob@talk.example");
    let room_payload = json!({ "token": "team", "type": 2 });

    client
        .sync
        .apply_fetched_rooms(&alice, vec![payload(room_payload.clone())]);
    client
        .sync
        .apply_fetched_rooms(&bob, vec![payload(room_payload)]);

    assert_eq!(client.repo.get_all(&alice)?.len(), 1);
    assert_eq!(client.repo.get_all(&bob)?.len(), 1);

    client.repo.delete_all(&alice)?;
    assert_eq!(client.repo.get_all(&alice)?.len(), 0);
    assert_eq!(client.repo.get_all(&bob)?.len(), 1);
    Ok(())
}

#[test]
fn test_permissions_resolve_through_the_whole_stack() -> anyhow::Result<()> {
    let client = TestClient::new();
    let acc = account("alice@talk.example");

    client.sync.apply_fetched_rooms(
        &acc,
        vec![payload(json!({
            "token": "team",
            "type": 2,
            "defaultPermissions": 2 + 4,          // StartCall | JoinCall
            "attendeePermissions": 1 + 128        // Custom | Chat
        }))],
    );

    let room = client.repo.get(&RoomId::new(&acc, "team")?)?.unwrap();
    assert_eq!(room.effective_permissions(), Permissions::CHAT);
    assert!(room.can_chat());
    assert!(!room.can_join_call());
    Ok(())
}
