// talk-core-client/talk-store
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod repository;
mod store;

pub mod prelude;

pub use repository::{Entity, KeyType};
pub use store::{
    ReadTransaction, ReadableCollection, Store, StoreError, WritableCollection, WriteTransaction,
};
