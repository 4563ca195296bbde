//! Shopping cart module.
//!
//! Contains the cart and its line items, the manager that owns a cart for
//! a browsing session, the commands it accepts, and the view it renders to.

mod cart;
mod command;
mod manager;
mod view;

pub use cart::{Cart, LineItem, Product, QuantityChange};
pub use command::{CartCommand, Transition};
pub use manager::CartManager;
pub use view::{Badge, CartRow, CartView};
