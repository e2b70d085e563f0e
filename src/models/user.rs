//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User record stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Generated identifier (also used as document ID)
    pub id: String,
    /// Free-text label; no uniqueness is enforced
    pub username: String,
}
