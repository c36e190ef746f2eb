//! Local storage adapter - key-value persistence for the cart snapshot.
//!
//! Values live in the `local_storage` table, one row per key. The snapshot
//! helpers serialize the entire `CartState` to JSON and read it back verbatim.

use crate::{
    entities::{LocalStorage, local_storage},
    errors::Result,
    models::CartState,
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use tracing::{debug, instrument, warn};

/// Storage key the cart state is kept under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "rotate-app";

/// Reads the value stored under `key`.
///
/// # Returns
/// * `Ok(Some(value))` - The key exists
/// * `Ok(None)` - Nothing stored under this key
#[instrument(skip(db))]
pub async fn get_value<C>(db: &C, key: &str) -> Result<Option<String>>
where
    C: ConnectionTrait,
{
    let row = LocalStorage::find()
        .filter(local_storage::Column::Key.eq(key))
        .one(db)
        .await?;
    debug!(found = row.is_some(), "Local storage lookup");
    Ok(row.map(|r| r.value))
}

/// Stores `value` under `key`, replacing any previous value.
#[instrument(skip(db, value), fields(bytes = value.len()))]
pub async fn set_value<C>(db: &C, key: &str, value: String) -> Result<()>
where
    C: ConnectionTrait,
{
    let now = Utc::now().naive_utc();

    let existing = LocalStorage::find()
        .filter(local_storage::Column::Key.eq(key))
        .one(db)
        .await?;

    if let Some(row) = existing {
        let mut active_model: local_storage::ActiveModel = row.into();
        active_model.value = Set(value);
        active_model.updated_at = Set(now);
        active_model.update(db).await?;
    } else {
        let new_row = local_storage::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(now),
            ..Default::default()
        };
        new_row.insert(db).await?;
    }

    Ok(())
}

/// Deletes whatever is stored under `key`. Returns whether a row was removed.
#[instrument(skip(db))]
pub async fn remove_value<C>(db: &C, key: &str) -> Result<bool>
where
    C: ConnectionTrait,
{
    let result = LocalStorage::delete_many()
        .filter(local_storage::Column::Key.eq(key))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}

/// Serializes the state and writes it under `key`.
pub async fn save_state<C>(db: &C, key: &str, state: &CartState) -> Result<()>
where
    C: ConnectionTrait,
{
    let json = serde_json::to_string(state)?;
    set_value(db, key, json).await
}

/// Reads the state stored under `key`.
///
/// A snapshot that no longer parses is treated as absent so the store can
/// start from defaults instead of refusing to boot.
pub async fn load_state<C>(db: &C, key: &str) -> Result<Option<CartState>>
where
    C: ConnectionTrait,
{
    let Some(json) = get_value(db, key).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&json) {
        Ok(state) => Ok(Some(state)),
        Err(e) => {
            warn!(key, error = %e, "Discarding unreadable cart snapshot");
            Ok(None)
        }
    }
}
