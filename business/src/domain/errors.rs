/// Failures reported by the catalog store and the cart session registry.
///
/// Messages are code-style keys so clients can localise them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No product or session with the requested id.
    #[error("repository.not_found")]
    NotFound,
    /// A stored record could not be mapped back into the domain.
    #[error("repository.persistence")]
    Persistence,
    /// A session with the same id is already live.
    #[error("repository.duplicated")]
    Duplicated,
    /// The catalog database rejected or failed the query.
    #[error("repository.database_error")]
    DatabaseError,
}
