// talk-core-client/talk-core-client
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod rooms_repository;

pub use rooms_repository::RoomsRepository;
