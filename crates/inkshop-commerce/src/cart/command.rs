//! User intents and their outcomes.

use crate::cart::Product;
use crate::checkout::CheckoutLink;
use crate::ids::ProductId;

/// A user intent coming from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// "Add to cart" on a product card.
    Add(Product),
    /// "+" on a cart row.
    Increment(ProductId),
    /// "−" on a cart row.
    Decrement(ProductId),
    /// Arbitrary quantity change.
    UpdateQuantity { id: ProductId, delta: i64 },
    /// Remove control on a cart row.
    Remove(ProductId),
    /// Checkout button.
    Checkout,
    /// Cart trigger in the header.
    Open,
    /// Close button or overlay click.
    Close,
}

/// What a dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transition {
    /// The cart contents changed (and were persisted).
    pub cart_changed: bool,
    /// The panel's open state changed.
    pub panel_changed: bool,
    /// Panel state after the command.
    pub panel_open: bool,
    /// Link the host must open in a new browsing context.
    pub open_link: Option<CheckoutLink>,
}

impl Transition {
    pub(crate) fn unchanged(panel_open: bool) -> Self {
        Self {
            panel_open,
            ..Self::default()
        }
    }

    /// True if the command had no effect at all.
    pub fn is_noop(&self) -> bool {
        !self.cart_changed && !self.panel_changed && self.open_link.is_none()
    }

    /// True if subscribers need a fresh view.
    pub fn needs_render(&self) -> bool {
        self.cart_changed || self.panel_changed
    }
}
