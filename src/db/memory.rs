// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store.
//!
//! Mirrors the Firestore operations over insertion-ordered vectors. Used for
//! local development (`DATABASE_URI=memory://`) and by the test suite.

use crate::error::AppError;
use crate::models::{Exercise, User};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// In-memory database; clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        let data = self.inner.read().await;
        Ok(data.users.iter().find(|u| u.id == user_id).cloned())
    }

    pub async fn create_user(&self, user: &User) -> Result<(), AppError> {
        let mut data = self.inner.write().await;
        if data.users.iter().any(|u| u.id == user.id) {
            return Err(AppError::Database(format!("duplicate user id {}", user.id)));
        }
        data.users.push(user.clone());
        Ok(())
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.inner.read().await.users.clone())
    }

    pub async fn create_exercise(&self, exercise: &Exercise) -> Result<(), AppError> {
        let mut data = self.inner.write().await;
        if data.exercises.iter().any(|e| e.id == exercise.id) {
            return Err(AppError::Database(format!(
                "duplicate exercise id {}",
                exercise.id
            )));
        }
        data.exercises.push(exercise.clone());
        Ok(())
    }

    pub async fn get_exercises_for_user(&self, user_id: &str) -> Result<Vec<Exercise>, AppError> {
        let data = self.inner.read().await;
        Ok(data
            .exercises
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    pub async fn reset_all(&self) -> Result<usize, AppError> {
        let mut data = self.inner.write().await;
        let deleted = data.users.len() + data.exercises.len();
        *data = Collections::default();
        Ok(deleted)
    }
}
