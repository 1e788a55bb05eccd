use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{CartSession, LineItem, Receipt};
use business::domain::cart::use_cases::scan::ScanResult;

use crate::api::money::format_money;
use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Product identifier
    pub product_id: String,
    /// Product name as captured on first add
    pub name: String,
    /// Unit price as captured on first add
    pub unit_price: String,
    /// Units of this product in the cart
    pub quantity: u32,
    /// unit_price x quantity
    pub line_total: String,
}

impl From<&LineItem> for CartLineResponse {
    fn from(line: &LineItem) -> Self {
        Self {
            product_id: line.id().to_string(),
            name: line.name().to_string(),
            unit_price: format_money(line.unit_price()),
            quantity: line.quantity(),
            line_total: format_money(line.line_total()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Session identifier
    pub id: String,
    /// Lines in insertion order
    pub lines: Vec<CartLineResponse>,
    /// Number of distinct products
    pub line_count: u32,
    /// Sum of all quantities
    pub item_count: u64,
    /// Sum of all line totals
    pub grand_total: String,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CartSession> for CartResponse {
    fn from(session: CartSession) -> Self {
        Self {
            id: session.id.to_string(),
            lines: session.cart.lines().iter().map(Into::into).collect(),
            line_count: session.cart.line_count() as u32,
            item_count: session.cart.item_count(),
            grand_total: format_money(session.cart.total()),
            started_at: session.started_at,
            updated_at: session.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ScanRequest {
    /// Raw payload read from the QR code
    pub code: String,
}

#[derive(Debug, Clone, Object)]
pub struct ScanResponse {
    /// Catalog entry the code resolved to
    pub product: ProductResponse,
    /// Cart after the product was added
    pub cart: CartResponse,
}

impl From<ScanResult> for ScanResponse {
    fn from(result: ScanResult) -> Self {
        Self {
            product: result.product.into(),
            cart: result.session.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddLineRequest {
    /// Product identifier
    pub product_id: String,
    /// Display name for the line
    pub name: String,
    /// Unit price as a decimal string; ignored when the line already exists
    pub unit_price: String,
}

#[derive(Debug, Clone, Object)]
pub struct ReceiptResponse {
    /// Session that was checked out
    pub session_id: String,
    pub lines: Vec<CartLineResponse>,
    pub item_count: u64,
    pub grand_total: String,
    pub completed_at: DateTime<Utc>,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            session_id: receipt.session_id.to_string(),
            lines: receipt.lines.iter().map(Into::into).collect(),
            item_count: receipt.item_count,
            grand_total: format_money(&receipt.grand_total),
            completed_at: receipt.completed_at,
        }
    }
}
