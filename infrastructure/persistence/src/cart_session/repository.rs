use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::{CartMutation, CartSession};
use business::domain::cart::repository::CartSessionRepository;
use business::domain::errors::RepositoryError;

/// Process-local session registry.
///
/// Carts hold no durable state, so sessions live only as long as the server.
/// Every mutation takes the write lock for the whole read-modify-write.
#[derive(Default)]
pub struct CartSessionRepositoryInMemory {
    sessions: RwLock<HashMap<Uuid, CartSession>>,
}

impl CartSessionRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartSessionRepository for CartSessionRepositoryInMemory {
    async fn create(&self, session: &CartSession) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return Err(RepositoryError::Duplicated);
        }

        sessions.insert(session.id, session.clone());
        tracing::debug!(session_id = %session.id, live = sessions.len(), "cart session stored");
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<CartSession, RepositoryError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn apply(&self, id: Uuid, mutation: CartMutation) -> Result<CartSession, CartError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(CartError::SessionNotFound)?;

        session.apply(mutation)?;
        Ok(session.clone())
    }

    async fn remove(&self, id: Uuid) -> Result<CartSession, RepositoryError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .ok_or(RepositoryError::NotFound)
    }

    async fn remove_non_empty(&self, id: Uuid) -> Result<CartSession, CartError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get(&id).ok_or(CartError::SessionNotFound)?;
        if session.cart.is_empty() {
            return Err(CartError::EmptyCart);
        }

        sessions.remove(&id).ok_or(CartError::SessionNotFound)
    }

    async fn remove_idle_since(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.updated_at >= cutoff);

        Ok((before - sessions.len()) as u64)
    }
}
