//! Database layer (Firestore, with an in-memory backend for tests).

pub mod firestore;
pub mod memory;

pub use firestore::{FirestoreDb, LogFilter};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const EXERCISES: &str = "exercises";
}
