//! Local storage entity - Stores key-value pairs that survive process restarts.
//! The cart store keeps its whole serialized state under a single key
//! (`"rotate-app"` by default).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Local storage database model - one serialized value per key
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "local_storage")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Storage key (e.g., `"rotate-app"`)
    #[sea_orm(unique)]
    pub key: String,
    /// Stored value, JSON text for the cart snapshot
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When this value was last written
    pub updated_at: DateTime,
}

/// `LocalStorage` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
