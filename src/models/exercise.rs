// SPDX-License-Identifier: MIT

//! Exercise model for storage and API.

use serde::{Deserialize, Serialize};

/// Stored exercise record in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Generated identifier (also used as document ID)
    pub id: String,
    /// Owning user's ID. A weak reference: the store does not enforce it.
    pub user_id: String,
    /// What the exercise was
    pub description: String,
    /// Duration in caller-defined units (the API does not interpret it)
    pub duration: i64,
    /// When the exercise happened (RFC3339, UTC)
    pub date: String,
}
