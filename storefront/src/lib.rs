//! Inkshop studio storefront
//!
//! The browser side of the studio page:
//! - Product cards that add to the cart
//! - Cart sidebar with quantity controls and messaging checkout
//! - Gallery lightbox with keyboard and swipe navigation
//! - Header shadow, active nav link and scroll-to-top on scroll
//! - Toast notifications
//! - Contact form with spam and rate-limit checks

mod app;
mod catalog;
mod store;
mod toast;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
