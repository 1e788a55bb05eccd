use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::errors::CartError;
use super::model::{CartMutation, CartSession};

/// Registry of live shopping sessions.
///
/// Carts are session-scoped and never outlive the process. `apply` runs the
/// mutation against the stored cart in one step: concurrent callers on the
/// same session are serialized and each sees the cart its own mutation left
/// behind.
#[async_trait]
pub trait CartSessionRepository: Send + Sync {
    async fn create(&self, session: &CartSession) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<CartSession, RepositoryError>;
    async fn apply(&self, id: Uuid, mutation: CartMutation) -> Result<CartSession, CartError>;
    /// Removes the session and returns its final state.
    async fn remove(&self, id: Uuid) -> Result<CartSession, RepositoryError>;
    /// Removes the session only if its cart holds at least one line, checking
    /// and removing in one step. Fails with `EmptyCart` and keeps the session
    /// otherwise.
    async fn remove_non_empty(&self, id: Uuid) -> Result<CartSession, CartError>;
    async fn remove_idle_since(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError>;
}
