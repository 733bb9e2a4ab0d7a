// talk-core-client/talk-store
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::{
    Entity, KeyType, ReadTransaction, ReadableCollection, Store, StoreError, WritableCollection,
    WriteTransaction,
};
