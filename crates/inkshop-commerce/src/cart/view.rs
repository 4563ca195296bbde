//! Render-ready projection of the cart.

use crate::cart::Cart;
use crate::config::ShopConfig;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Everything the cart panel, total and badge show.
///
/// Built in one step from the cart so the three can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    /// One row per item, in cart order.
    pub rows: Vec<CartRow>,
    /// Empty-state text, set only when there are no rows.
    pub empty_message: Option<String>,
    pub total: Money,
    pub total_display: String,
    pub badge: Badge,
    pub checkout_enabled: bool,
    pub panel_open: bool,
}

/// One item row in the cart panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRow {
    pub id: ProductId,
    pub icon: String,
    pub name: String,
    pub price_display: String,
    pub quantity: i64,
    pub subtotal_display: String,
}

/// The item count shown on the cart trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub count: i64,
    pub visible: bool,
}

impl CartView {
    /// Project the cart into a view.
    pub fn project(cart: &Cart, panel_open: bool, config: &ShopConfig) -> Self {
        let currency = config.currency;
        let rows: Vec<CartRow> = cart
            .items()
            .iter()
            .map(|item| CartRow {
                id: item.id.clone(),
                icon: item.icon.clone(),
                name: item.name.clone(),
                price_display: item.unit_price_in(currency).display(),
                quantity: item.quantity,
                subtotal_display: item.subtotal_in(currency).display(),
            })
            .collect();

        let is_empty = rows.is_empty();
        let total = cart.total_in(currency);
        let count = cart.count();

        Self {
            empty_message: is_empty.then(|| config.messages.cart_empty.clone()),
            rows,
            total,
            total_display: total.display(),
            badge: Badge {
                count,
                visible: count > 0,
            },
            checkout_enabled: !is_empty,
            panel_open,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
