// SPDX-License-Identifier: MIT

//! In-memory store backend used as a test double.
//!
//! Mirrors the Firestore semantics the routes rely on: insertion order is
//! the "store-native" order, and date-range filtering compares the stored
//! RFC3339 strings, which sort chronologically.

use crate::db::firestore::LogFilter;
use crate::models::{Exercise, User};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MemoryInner {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// Shared in-memory store; cloning shares the underlying data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn insert_user(&self, user: User) {
        self.inner.lock().expect("memory store poisoned").users.push(user);
    }

    pub fn list_users(&self) -> Vec<User> {
        self.inner.lock().expect("memory store poisoned").users.clone()
    }

    pub fn get_user(&self, id: &str) -> Option<User> {
        self.inner
            .lock()
            .expect("memory store poisoned")
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    pub fn insert_exercise(&self, exercise: Exercise) {
        self.inner
            .lock()
            .expect("memory store poisoned")
            .exercises
            .push(exercise);
    }

    pub fn find_exercises(&self, user_id: &str, filter: &LogFilter) -> Vec<Exercise> {
        self.inner
            .lock()
            .expect("memory store poisoned")
            .exercises
            .iter()
            .filter(|e| e.user_id == user_id)
            .filter(|e| filter.from.as_deref().map_or(true, |from| e.date.as_str() >= from))
            .filter(|e| filter.to.as_deref().map_or(true, |to| e.date.as_str() <= to))
            .take(filter.limit as usize)
            .cloned()
            .collect()
    }
}
