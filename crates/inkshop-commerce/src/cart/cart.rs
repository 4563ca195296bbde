//! Cart and line item types.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Product attributes read from a product card when "add" is pressed.
///
/// Not validated: whatever the markup carries goes into the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in whole currency units.
    pub unit_price: i64,
    /// Display glyph.
    pub icon: String,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: i64,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            icon: icon.into(),
        }
    }
}

/// A line item in the cart.
///
/// Field names on the wire (`id`, `name`, `price`, `icon`, `quantity`) match
/// what the studio site has always stored, so carts saved by older page
/// versions keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    /// Unit price in whole currency units.
    #[serde(rename = "price")]
    pub unit_price: i64,
    #[serde(default)]
    pub icon: String,
    /// Always >= 1 while the item is in a cart.
    pub quantity: i64,
}

impl LineItem {
    /// A new line item with quantity 1.
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            unit_price: product.unit_price,
            icon: product.icon,
            quantity: 1,
        }
    }

    /// `unit_price * quantity`, saturating.
    pub fn subtotal(&self) -> i64 {
        self.unit_price.saturating_mul(self.quantity)
    }

    pub fn unit_price_in(&self, currency: Currency) -> Money {
        Money::new(self.unit_price, currency)
    }

    pub fn subtotal_in(&self, currency: Currency) -> Money {
        self.unit_price_in(currency) * self.quantity
    }
}

/// Outcome of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// No item with that id.
    Missing,
    /// Item kept, with its new quantity.
    Updated(i64),
    /// Quantity dropped to zero or below and the item was removed.
    Removed,
}

/// A shopping cart: line items in first-add order, one per product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored items.
    ///
    /// Repairs payloads that break the cart invariants: a repeated id is
    /// folded into its first occurrence, and items with a non-positive
    /// quantity are dropped.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity <= 0 {
                continue;
            }
            match cart.items.iter_mut().find(|i| i.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity)
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Add one unit of a product.
    ///
    /// An id already in the cart gets its quantity bumped; otherwise the
    /// product is appended with quantity 1. Returns the item's new quantity.
    pub fn add(&mut self, product: Product) -> i64 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.items.push(LineItem::from_product(product));
        1
    }

    /// Remove an item. Returns false if the id was not in the cart.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Add `delta` to an item's quantity.
    ///
    /// A resulting quantity of zero or below removes the item.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> QuantityChange {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == id) else {
            return QuantityChange::Missing;
        };

        let quantity = item.quantity.saturating_add(delta);
        if quantity <= 0 {
            self.remove(id);
            return QuantityChange::Removed;
        }

        item.quantity = quantity;
        QuantityChange::Updated(quantity)
    }

    /// Sum of `unit_price * quantity` over all items; 0 when empty.
    pub fn total(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.subtotal()))
    }

    /// [`Cart::total`] as money in `currency`.
    pub fn total_in(&self, currency: Currency) -> Money {
        self.items
            .iter()
            .fold(Money::zero(currency), |acc, item| acc + item.subtotal_in(currency))
    }

    /// Sum of quantities (not the number of distinct items).
    pub fn count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Items in cart order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
