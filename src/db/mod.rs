//! Database layer (Firestore, or an in-process store for development).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::config::DatabaseUri;
use crate::error::AppError;
use crate::models::{Exercise, User};
use anyhow::anyhow;
use ring::rand::{self, SystemRandom};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const EXERCISES: &str = "exercises";
}

/// Bytes of randomness in a document ID (24 hex characters).
const DOCUMENT_ID_BYTES: usize = 12;

/// Generate a new opaque document ID.
pub fn new_document_id() -> Result<String, AppError> {
    let bytes: [u8; DOCUMENT_ID_BYTES] = rand::generate(&SystemRandom::new())
        .map_err(|_| anyhow!("system random number generator failed"))?
        .expose();
    Ok(hex::encode(bytes))
}

/// Database handle shared by all request handlers.
///
/// Cheap to clone; every clone talks to the same underlying store.
#[derive(Clone)]
pub struct Db {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    Firestore(FirestoreDb),
    Memory(MemoryDb),
}

impl Db {
    /// Open the store named by the connection string.
    pub async fn connect(uri: &DatabaseUri) -> Result<Self, AppError> {
        let backend = match uri {
            DatabaseUri::Memory => {
                tracing::warn!("Using in-memory store; data is lost on restart");
                Backend::Memory(MemoryDb::new())
            }
            DatabaseUri::Firestore { project_id } => {
                Backend::Firestore(FirestoreDb::new(project_id).await?)
            }
        };

        Ok(Self { backend })
    }

    /// Fresh, empty in-memory store.
    pub fn new_memory() -> Self {
        Self {
            backend: Backend::Memory(MemoryDb::new()),
        }
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Store a new user.
    pub async fn create_user(&self, user: &User) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(db) => db.create_user(user).await,
            Backend::Memory(db) => db.create_user(user).await,
        }
    }

    /// Get a user by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        match &self.backend {
            Backend::Firestore(db) => db.get_user(user_id).await,
            Backend::Memory(db) => db.get_user(user_id).await,
        }
    }

    /// All users in registration order.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        match &self.backend {
            Backend::Firestore(db) => db.list_users().await,
            Backend::Memory(db) => db.list_users().await,
        }
    }

    // ─── Exercise Operations ─────────────────────────────────────

    /// Store a new exercise entry.
    pub async fn create_exercise(&self, exercise: &Exercise) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(db) => db.create_exercise(exercise).await,
            Backend::Memory(db) => db.create_exercise(exercise).await,
        }
    }

    /// All exercises owned by a user, in creation order.
    pub async fn get_exercises_for_user(&self, user_id: &str) -> Result<Vec<Exercise>, AppError> {
        match &self.backend {
            Backend::Firestore(db) => db.get_exercises_for_user(user_id).await,
            Backend::Memory(db) => db.get_exercises_for_user(user_id).await,
        }
    }

    // ─── Administration ──────────────────────────────────────────

    /// Delete every user and exercise. Returns the number of documents removed.
    pub async fn reset_all(&self) -> Result<usize, AppError> {
        match &self.backend {
            Backend::Firestore(db) => db.reset_all().await,
            Backend::Memory(db) => db.reset_all().await,
        }
    }
}
