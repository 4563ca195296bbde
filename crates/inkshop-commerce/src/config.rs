//! Shop configuration.
//!
//! Every field has a default matching the live studio site, so an empty
//! TOML document is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::Currency;

/// Storage key the cart has always been written under.
pub const DEFAULT_STORAGE_KEY: &str = "tattoo-cart";

/// Shop-wide settings for the cart widget and contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Durable store key holding the serialized cart.
    pub storage_key: String,

    /// Messaging number orders are handed to at checkout.
    pub contact_number: String,

    /// Currency all catalog prices are in.
    pub currency: Currency,

    /// How long a notification stays on screen.
    pub notification_dismiss_ms: u32,

    /// Minimum gap between two contact form submissions.
    pub contact_rate_limit_secs: u64,

    /// User-facing strings.
    pub messages: Messages,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            contact_number: "381601234567".to_string(),
            currency: Currency::RSD,
            notification_dismiss_ms: 4000,
            contact_rate_limit_secs: 60,
            messages: Messages::default(),
        }
    }
}

impl ShopConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    ///
    /// ```
    /// use inkshop_commerce::config::ShopConfig;
    ///
    /// let config = ShopConfig::from_toml_str(r#"contact_number = "38160000000""#).unwrap();
    /// assert_eq!(config.contact_number, "38160000000");
    /// assert_eq!(config.storage_key, "tattoo-cart");
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(source)?)
    }

    /// Contact rate limit in milliseconds.
    pub fn contact_rate_limit_ms(&self) -> u64 {
        self.contact_rate_limit_secs.saturating_mul(1000)
    }
}

/// User-facing strings, in the studio's language by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub cart_title: String,
    pub cart_empty: String,
    pub total_label: String,
    pub checkout_button: String,
    /// `{name}` is replaced by the product name.
    pub item_added: String,
    pub item_removed: String,
    pub checkout_redirect: String,
    pub order_greeting: String,
    pub invalid_email: String,
    pub rate_limited: String,
    pub contact_sent: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            cart_title: "Korpa".to_string(),
            cart_empty: "Vaša korpa je prazna".to_string(),
            total_label: "Ukupno".to_string(),
            checkout_button: "Poruči".to_string(),
            item_added: "{name} dodato u korpu!".to_string(),
            item_removed: "Proizvod uklonjen iz korpe".to_string(),
            checkout_redirect: "Preusmjeravamo vas na WhatsApp...".to_string(),
            order_greeting: "Pozdrav! Želim da poručim:".to_string(),
            invalid_email: "Unesite validnu email adresu".to_string(),
            rate_limited: "Molimo sačekajte pre ponovnog slanja poruke".to_string(),
            contact_sent: "Poruka uspešno poslata! Javićemo vam se uskoro.".to_string(),
        }
    }
}

impl Messages {
    /// The "added to cart" message for a product.
    pub fn item_added_for(&self, name: &str) -> String {
        self.item_added.replace("{name}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = ShopConfig::from_toml_str("").unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ShopConfig::from_toml_str(
            r#"
            storage_key = "studio-cart"
            currency = "EUR"

            [messages]
            cart_title = "Cart"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage_key, "studio-cart");
        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.messages.cart_title, "Cart");
        assert_eq!(config.messages.cart_empty, "Vaša korpa je prazna");
        assert_eq!(config.notification_dismiss_ms, 4000);
    }

    #[test]
    fn test_invalid_document() {
        let result = ShopConfig::from_toml_str("notification_dismiss_ms = \"soon\"");
        assert!(matches!(result, Err(CommerceError::InvalidConfig(_))));
    }

    #[test]
    fn test_item_added_template() {
        let messages = Messages::default();
        assert_eq!(messages.item_added_for("Sleeve"), "Sleeve dodato u korpu!");
    }

    #[test]
    fn test_rate_limit_ms() {
        assert_eq!(ShopConfig::default().contact_rate_limit_ms(), 60_000);
    }
}
