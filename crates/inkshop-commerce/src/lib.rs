//! Cart widget domain for the Inkshop studio storefront.
//!
//! This crate holds everything the storefront's interactive parts do,
//! independent of any UI toolkit:
//!
//! - **Cart**: line items, the [`CartManager`] that owns a session's cart
//!   and persists it, the [`CartCommand`]s it accepts and the
//!   [`CartView`] it renders to
//! - **Checkout**: order summary and the messaging deep-link
//! - **Notifications**: the optional sink for transient messages
//! - **Contact**: contact form validation and rate limiting
//! - **Gallery**: lightbox navigation with keyboard and swipe input
//! - **Navigation**: header, scroll-to-top and active-link state from the
//!   scroll position
//!
//! # Example
//!
//! ```rust
//! use inkshop_cache::MemoryStore;
//! use inkshop_commerce::prelude::*;
//!
//! let mut cart = CartManager::load(MemoryStore::new(), ShopConfig::default());
//!
//! cart.dispatch(CartCommand::Add(Product::new("a", "Sleeve", 5000, "🖊")));
//! cart.dispatch(CartCommand::Increment("a".into()));
//!
//! assert_eq!(cart.compute_total(), 10000);
//! assert_eq!(cart.view().badge.count, 2);
//!
//! let link = cart.checkout().unwrap();
//! assert!(link.message().contains("Sleeve x2 - 10000"));
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod notify;

pub mod cart;
pub mod checkout;
pub mod contact;
pub mod gallery;
pub mod navigation;

pub use cart::{CartCommand, CartManager, CartView};
pub use config::ShopConfig;
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{Messages, ShopConfig};
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
    pub use crate::notify::{Notification, NotificationKind, Notifier, RecordingNotifier};

    // Cart
    pub use crate::cart::{
        Badge, Cart, CartCommand, CartManager, CartRow, CartView, LineItem, Product,
        QuantityChange, Transition,
    };

    // Checkout
    pub use crate::checkout::{CheckoutLink, OrderLine, OrderSummary};

    // Contact
    pub use crate::contact::{
        ContactForm, ContactOutcome, ContactRejection, ContactValidator, SanitizedContact,
    };

    // Page
    pub use crate::gallery::{Gallery, GalleryCommand, GalleryImage};
    pub use crate::navigation::{ScrollState, SectionBounds};
}
