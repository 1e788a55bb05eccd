use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::catalog::model::Product;

use crate::api::money::format_money;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price as a decimal string, e.g. "4.99"
    pub price: String,
    /// Units in stock
    #[oai(default)]
    pub stock: u32,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier, also the QR code payload
    pub id: String,
    /// Product name
    pub name: String,
    /// Unit price with two decimals
    pub price: String,
    /// Units in stock
    pub stock: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: format_money(&product.price),
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
