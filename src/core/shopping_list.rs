use crate::models::{Product, ShoppingItem, ShoppingSummary};
use tracing::debug;

/// In-memory shopping list
///
/// Pure view-model operations; persistence belongs to the application
/// shell. Item identity is the product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<ShoppingItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a product: bumps the quantity if it is already listed, otherwise
    /// appends a new unchecked row.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(ShoppingItem {
            product,
            quantity: 1,
            checked: false,
            added_at: Some(chrono::Utc::now()),
        });
    }

    /// Flip the purchased state of an item; unknown ids are a no-op
    pub fn toggle_checked(&mut self, product_id: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.checked = !item.checked;
        }
    }

    /// Remove an item; unknown ids are a no-op
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Drop every purchased item (the "clear purchased items" action)
    pub fn clear_checked(&mut self) {
        let before = self.items.len();
        self.items.retain(|i| !i.checked);
        debug!(removed = before - self.items.len(), "cleared purchased items");
    }

    /// Totals for the list header, compared against an optional budget
    /// (typically `profile.budget`)
    pub fn summary(&self, budget: Option<f64>) -> ShoppingSummary {
        let total_price: f64 = self
            .items
            .iter()
            .map(|i| i.product.price * i.quantity as f64)
            .sum();

        ShoppingSummary {
            total_items: self.items.len(),
            checked_count: self.items.iter().filter(|i| i.checked).count(),
            total_price,
            over_budget: budget.map_or(false, |b| total_price > b),
        }
    }
}
