// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (create, list, get by id)
//! - Exercises (create, filtered find)
//!
//! The wrapper carries a backend enum so tests can swap the live Firestore
//! client for an in-memory store without touching the route handlers.

use crate::db::collections;
use crate::db::memory::MemoryStore;
use crate::error::AppError;
use crate::models::{Exercise, User};

/// Cap applied to log queries when the caller supplies no usable limit.
pub const DEFAULT_LOG_LIMIT: u32 = 500;

/// Date-range and result-count filter for exercise queries.
///
/// `from`/`to` are inclusive bounds on the stored RFC3339 date string;
/// both absent means no date predicate at all.
#[derive(Debug, Clone)]
pub struct LogFilter {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: u32,
}

impl Default for LogFilter {
    /// No date bounds, capped at [`DEFAULT_LOG_LIMIT`].
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            limit: DEFAULT_LOG_LIMIT,
        }
    }
}

#[derive(Clone)]
enum Backend {
    Firestore(firestore::FirestoreDb),
    Memory(MemoryStore),
}

/// Document store client.
#[derive(Clone)]
pub struct FirestoreDb {
    backend: Backend,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create a database backed by process memory, for testing.
    pub fn new_memory() -> Self {
        Self {
            backend: Backend::Memory(MemoryStore::default()),
        }
    }

    /// Generate a document id. Opaque to callers; uniqueness is all that matters.
    fn new_document_id() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Persist a new user and return the stored record, id included.
    ///
    /// The username is stored as given: empty and duplicate usernames are
    /// both allowed.
    pub async fn create_user(&self, username: &str) -> Result<User, AppError> {
        let user = User {
            id: Self::new_document_id(),
            username: username.to_string(),
        };

        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::USERS)
                    .document_id(&user.id)
                    .object(&user)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }
            Backend::Memory(store) => store.insert_user(user.clone()),
        }

        Ok(user)
    }

    /// List all users in store-native order. Empty vec when none exist.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::USERS)
                .obj()
                .query()
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.list_users()),
        }
    }

    /// Get a user by id. `None` when the id resolves to nothing.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::USERS)
                .obj()
                .one(id)
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.get_user(id)),
        }
    }

    // ─── Exercise Operations ─────────────────────────────────────

    /// Persist a new exercise owned by `user_id`.
    ///
    /// No check that `user_id` refers to an existing user happens here;
    /// the route handler does that lookup first.
    pub async fn create_exercise(
        &self,
        user_id: &str,
        description: &str,
        duration: i64,
        date: String,
    ) -> Result<Exercise, AppError> {
        let exercise = Exercise {
            id: Self::new_document_id(),
            user_id: user_id.to_string(),
            description: description.to_string(),
            duration,
            date,
        };

        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::EXERCISES)
                    .document_id(&exercise.id)
                    .object(&exercise)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }
            Backend::Memory(store) => store.insert_exercise(exercise.clone()),
        }

        Ok(exercise)
    }

    /// Find a user's exercises, optionally bounded by an inclusive date
    /// interval and capped at `filter.limit` records.
    pub async fn find_exercises(
        &self,
        user_id: &str,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let user_id = user_id.to_string();
                let from = filter.from.clone();
                let to = filter.to.clone();

                client
                    .fluent()
                    .select()
                    .from(collections::EXERCISES)
                    .filter(move |q| {
                        q.for_all([
                            q.field("user_id").eq(user_id.clone()),
                            from.clone()
                                .and_then(|d| q.field("date").greater_than_or_equal(d)),
                            to.clone()
                                .and_then(|d| q.field("date").less_than_or_equal(d)),
                        ])
                    })
                    .limit(filter.limit)
                    .obj()
                    .query()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))
            }
            Backend::Memory(store) => Ok(store.find_exercises(user_id, filter)),
        }
    }
}
