#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.name_empty")]
    NameEmpty,
    #[error("catalog.invalid_price")]
    InvalidPrice,
    #[error("catalog.invalid_stock")]
    InvalidStock,
    #[error("catalog.invalid_code")]
    InvalidCode,
    #[error("catalog.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
