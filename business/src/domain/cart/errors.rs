#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_unit_price")]
    InvalidArgument,
    #[error("cart.session_not_found")]
    SessionNotFound,
    #[error("cart.line_not_found")]
    LineNotFound,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.invalid_code")]
    InvalidCode,
    #[error("cart.empty")]
    EmptyCart,
    #[error("cart.quantity_limit")]
    QuantityLimit,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
