//! Order summary and messaging deep-link.

use crate::cart::Cart;
use crate::config::ShopConfig;
use crate::money::Money;
use serde::Serialize;

/// Deep-link base of the messaging service orders are handed to.
const DEEP_LINK_BASE: &str = "https://wa.me/";

/// One ordered product in a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: i64,
    pub subtotal: Money,
}

/// Human-readable order built from the cart at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub greeting: String,
    pub lines: Vec<OrderLine>,
    pub total_label: String,
    pub total: Money,
}

impl OrderSummary {
    /// Summarize a cart. `None` for an empty cart.
    pub fn from_cart(cart: &Cart, config: &ShopConfig) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }

        let currency = config.currency;
        Some(Self {
            greeting: config.messages.order_greeting.clone(),
            lines: cart
                .items()
                .iter()
                .map(|item| OrderLine {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    subtotal: item.subtotal_in(currency),
                })
                .collect(),
            total_label: config.messages.total_label.clone(),
            total: cart.total_in(currency),
        })
    }

    /// The message text: greeting, one line per item, then the total.
    ///
    /// ```text
    /// Pozdrav! Želim da poručim:
    ///
    /// Sleeve x2 - 10000 RSD
    ///
    /// Ukupno: 10000 RSD
    /// ```
    pub fn message(&self) -> String {
        let items = self
            .lines
            .iter()
            .map(|line| format!("{} x{} - {}", line.name, line.quantity, line.subtotal.plain()))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n\n{}\n\n{}: {}",
            self.greeting,
            items,
            self.total_label,
            self.total.plain()
        )
    }
}

/// A pre-filled messaging link carrying an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutLink {
    url: String,
    message: String,
}

impl CheckoutLink {
    /// Browsing context the link is opened in.
    pub const TARGET: &'static str = "_blank";

    /// Build a link to `number` with `message` as the pre-filled text.
    ///
    /// Anything but digits is stripped from the number, so "+381 60 123"
    /// and "38160123" produce the same link.
    pub fn new(number: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        let url = format!(
            "{DEEP_LINK_BASE}{digits}?text={}",
            urlencoding::encode(&message)
        );
        Self { url, message }
    }

    /// Build the checkout link for a cart. `None` for an empty cart.
    pub fn for_cart(cart: &Cart, config: &ShopConfig) -> Option<Self> {
        let summary = OrderSummary::from_cart(cart, config)?;
        Some(Self::new(&config.contact_number, summary.message()))
    }

    /// The full, percent-encoded URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The unencoded message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}
