use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::shared::value_objects::ProductId;

/// Largest number of fractional digits a unit price may carry. Totals are
/// aligned to the widest scale in the cart, so this also bounds their size.
const MAX_PRICE_SCALE: i64 = 6;

/// One row of the cart: a product, the price captured when it was first
/// added, and how many units are being bought.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    id: ProductId,
    name: String,
    unit_price: BigDecimal,
    quantity: u32,
    line_total: BigDecimal,
}

impl LineItem {
    fn new(id: ProductId, unit_price: BigDecimal, name: String) -> Self {
        Self {
            id,
            name,
            line_total: unit_price.clone(),
            unit_price,
            quantity: 1,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> &BigDecimal {
        &self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> &BigDecimal {
        &self.line_total
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.line_total = &self.unit_price * &BigDecimal::from(quantity);
    }
}

/// A single state change requested by the presentation layer or the scan
/// pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum CartMutation {
    AddLine {
        product_id: ProductId,
        unit_price: BigDecimal,
        name: String,
    },
    SubLine {
        product_id: ProductId,
    },
    /// One more unit of a line already in the cart, at its captured price.
    Increment {
        product_id: ProductId,
    },
}

/// The cart store.
///
/// Lines are kept in insertion order and keyed by product id. Every mutation
/// updates the affected line and the grand total before returning, so a
/// reader holding a snapshot never sees one without the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<LineItem>,
    grand_total: BigDecimal,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product_id`.
    ///
    /// An existing line is incremented and keeps the price and name it was
    /// created with. Negative prices, and prices finer than
    /// `MAX_PRICE_SCALE` digits, are rejected with
    /// [`CartError::InvalidArgument`] and the cart is left untouched.
    pub fn add_line(
        &mut self,
        product_id: ProductId,
        unit_price: BigDecimal,
        name: impl Into<String>,
    ) -> Result<(), CartError> {
        if unit_price < BigDecimal::zero() {
            return Err(CartError::InvalidArgument);
        }
        let (_, scale) = unit_price.as_bigint_and_exponent();
        if scale.abs() > MAX_PRICE_SCALE {
            return Err(CartError::InvalidArgument);
        }

        match self.position(&product_id) {
            Some(index) => self.bump(index)?,
            None => self
                .lines
                .push(LineItem::new(product_id, unit_price, name.into())),
        }

        self.recompute_total();
        Ok(())
    }

    /// Adds one unit to an existing line. Fails with
    /// [`CartError::LineNotFound`] when the product has no line.
    pub fn increment(&mut self, product_id: &ProductId) -> Result<(), CartError> {
        let index = self
            .position(product_id)
            .ok_or(CartError::LineNotFound)?;

        self.bump(index)?;
        self.recompute_total();
        Ok(())
    }

    /// Removes one unit of `product_id`. A line at quantity 1 is dropped.
    /// Unknown ids are ignored.
    pub fn sub_line(&mut self, product_id: &ProductId) {
        let Some(index) = self.position(product_id) else {
            return;
        };

        let quantity = self.lines[index].quantity;
        if quantity > 1 {
            self.lines[index].set_quantity(quantity - 1);
        } else {
            self.lines.remove(index);
        }

        self.recompute_total();
    }

    pub fn apply(&mut self, mutation: CartMutation) -> Result<(), CartError> {
        match mutation {
            CartMutation::AddLine {
                product_id,
                unit_price,
                name,
            } => self.add_line(product_id, unit_price, name),
            CartMutation::SubLine { product_id } => {
                self.sub_line(&product_id);
                Ok(())
            }
            CartMutation::Increment { product_id } => self.increment(&product_id),
        }
    }

    pub fn total(&self) -> &BigDecimal {
        &self.grand_total
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.lines.iter().find(|line| &line.id == product_id)
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn bump(&mut self, index: usize) -> Result<(), CartError> {
        let line = &mut self.lines[index];
        let quantity = line
            .quantity
            .checked_add(1)
            .ok_or(CartError::QuantityLimit)?;
        line.set_quantity(quantity);
        Ok(())
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|line| &line.id == product_id)
    }

    fn recompute_total(&mut self) {
        self.grand_total = self
            .lines
            .iter()
            .fold(BigDecimal::zero(), |acc, line| acc + &line.line_total);
    }
}

/// A shopping session: the cart it exclusively owns and when it was last
/// touched.
#[derive(Debug, Clone)]
pub struct CartSession {
    pub id: Uuid,
    pub cart: Cart,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartSession {
    pub fn start() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            cart: Cart::new(),
            started_at: now,
            updated_at: now,
        }
    }

    /// Applies a mutation and refreshes `updated_at` when it succeeds.
    pub fn apply(&mut self, mutation: CartMutation) -> Result<(), CartError> {
        self.cart.apply(mutation)?;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Final snapshot of a session handed back on checkout.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub session_id: Uuid,
    pub lines: Vec<LineItem>,
    pub grand_total: BigDecimal,
    pub item_count: u64,
    pub completed_at: DateTime<Utc>,
}

impl From<CartSession> for Receipt {
    fn from(session: CartSession) -> Self {
        Self {
            session_id: session.id,
            grand_total: session.cart.total().clone(),
            item_count: session.cart.item_count(),
            lines: session.cart.lines,
            completed_at: Utc::now(),
        }
    }
}
