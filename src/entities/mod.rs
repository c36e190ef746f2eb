//! Entity module - SeaORM entity definitions for the storage database.
//! The cart store only needs a single key-value table standing in for browser local storage.

pub mod local_storage;

pub use local_storage::{Entity as LocalStorage, Model as LocalStorageModel};
