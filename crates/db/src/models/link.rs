//! Many-to-many junction descriptors.
//!
//! Every association in the schema is a two-column junction table
//! `(owner_column, target_column)`. The per-owner association enums
//! (`CharacterAssociation`, `HomeWorldAssociation`, ...) map a URL slug to
//! one of these descriptors so a single repository can maintain all of them.

use acolyte_core::types::DbId;
use serde::{Deserialize, Serialize};

/// A junction table and its two foreign key columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub table: &'static str,
    pub owner_column: &'static str,
    pub target_column: &'static str,
}

impl Link {
    pub const fn new(
        table: &'static str,
        owner_column: &'static str,
        target_column: &'static str,
    ) -> Self {
        Self {
            table,
            owner_column,
            target_column,
        }
    }
}

/// Body of a "replace association set" request and its response:
/// `{ "ids": [1, 2, 3] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLinks {
    pub ids: Vec<DbId>,
}
