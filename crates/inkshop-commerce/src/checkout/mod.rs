//! Checkout module.
//!
//! Checkout hands the order to an external messaging address through a
//! pre-filled link. Nothing is awaited and the cart is left as it was.

mod link;

pub use link::{CheckoutLink, OrderLine, OrderSummary};
