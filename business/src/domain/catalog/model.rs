use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;

use super::errors::CatalogError;
use crate::domain::shared::value_objects::ProductId;

/// Prices are stored as NUMERIC(12,2).
const PRICE_SCALE: i64 = 2;
const PRICE_INTEGER_DIGITS: u32 = 10;
/// Stock is stored as a signed 32-bit column.
const MAX_STOCK: u32 = i32::MAX as u32;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: BigDecimal,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: String, price: BigDecimal, stock: u32) -> Result<Self, CatalogError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::NameEmpty);
        }

        if !is_storable_price(&price) {
            return Err(CatalogError::InvalidPrice);
        }
        if stock > MAX_STOCK {
            return Err(CatalogError::InvalidStock);
        }

        let now = Utc::now();
        Ok(Self {
            id: ProductId::generate(),
            name,
            price,
            stock,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: BigDecimal,
        stock: u32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            stock,
            created_at,
            updated_at,
        }
    }
}

/// Non-negative, at most two fractional digits, and below 10^10.
fn is_storable_price(price: &BigDecimal) -> bool {
    let ceiling = BigDecimal::from(10u64.pow(PRICE_INTEGER_DIGITS));
    *price >= BigDecimal::zero()
        && price < &ceiling
        && price.with_scale(PRICE_SCALE) == *price
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn should_create_product_when_fields_valid() {
        let result = Product::new("Widget".to_string(), BigDecimal::from_str("5.00").unwrap(), 12);

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.stock, 12);
        assert!(product.id.as_str().starts_with("product_"));
    }

    #[test]
    fn should_trim_product_name() {
        let product = Product::new("  Widget ".to_string(), BigDecimal::from(1), 1).unwrap();

        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = Product::new("   ".to_string(), BigDecimal::from(1), 1);

        assert!(matches!(result.unwrap_err(), CatalogError::NameEmpty));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = Product::new(
            "Widget".to_string(),
            BigDecimal::from_str("-0.01").unwrap(),
            1,
        );

        assert!(matches!(result.unwrap_err(), CatalogError::InvalidPrice));
    }

    #[test]
    fn should_reject_price_with_more_than_two_decimals() {
        let result = Product::new(
            "Widget".to_string(),
            BigDecimal::from_str("1.234").unwrap(),
            1,
        );

        assert!(matches!(result.unwrap_err(), CatalogError::InvalidPrice));
    }

    #[test]
    fn should_accept_trailing_zero_decimals() {
        let product = Product::new(
            "Widget".to_string(),
            BigDecimal::from_str("1.2300").unwrap(),
            1,
        )
        .unwrap();

        assert_eq!(product.price, BigDecimal::from_str("1.23").unwrap());
    }

    #[test]
    fn should_reject_price_too_large_for_storage() {
        let largest = Product::new(
            "Widget".to_string(),
            BigDecimal::from_str("9999999999.99").unwrap(),
            1,
        );
        let too_large = Product::new(
            "Widget".to_string(),
            BigDecimal::from_str("10000000000").unwrap(),
            1,
        );

        assert!(largest.is_ok());
        assert!(matches!(too_large.unwrap_err(), CatalogError::InvalidPrice));
    }

    #[test]
    fn should_reject_stock_too_large_for_storage() {
        let at_limit = Product::new("Widget".to_string(), BigDecimal::from(1), i32::MAX as u32);
        let over_limit =
            Product::new("Widget".to_string(), BigDecimal::from(1), i32::MAX as u32 + 1);

        assert!(at_limit.is_ok());
        assert!(matches!(over_limit.unwrap_err(), CatalogError::InvalidStock));
    }

    #[test]
    fn should_allow_zero_price() {
        let result = Product::new("Sample".to_string(), BigDecimal::zero(), 0);

        assert!(result.is_ok());
    }
}
