use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::catalog::model::Product;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.price,
            u32::try_from(self.stock).unwrap_or(0),
            self.created_at,
            self.updated_at,
        )
    }
}
