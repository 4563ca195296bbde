//! The cart manager: state, persistence, and command dispatch.

use inkshop_cache::{Cache, KvStore};

use crate::cart::{Cart, CartCommand, CartView, LineItem, Product, QuantityChange, Transition};
use crate::checkout::CheckoutLink;
use crate::config::ShopConfig;
use crate::ids::ProductId;
use crate::notify::{Notification, Notifier};

type Subscriber = Box<dyn Fn(&CartView)>;

/// Owns the cart for one browsing session.
///
/// Construct it once when the page starts with [`CartManager::load`] and
/// hand it to the event handlers by reference. There is no teardown: the
/// cart outlives the page in the durable store.
///
/// Every mutation is written through to the store before subscribers see
/// the new [`CartView`].
pub struct CartManager<S> {
    cart: Cart,
    panel_open: bool,
    cache: Cache<S>,
    config: ShopConfig,
    notifier: Option<Box<dyn Notifier>>,
    subscribers: Vec<Subscriber>,
}

impl<S: KvStore> CartManager<S> {
    /// Load the persisted cart from `store`.
    ///
    /// An absent key or an unreadable payload yields an empty cart.
    pub fn load(store: S, config: ShopConfig) -> Self {
        let cache = Cache::new(store);
        let cart = load_cart(&cache, &config.storage_key);
        tracing::debug!(items = cart.len(), key = %config.storage_key, "cart loaded");

        Self {
            cart,
            panel_open: false,
            cache,
            config,
            notifier: None,
            subscribers: Vec::new(),
        }
    }

    /// Attach a notifier.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Register a view subscriber. It receives a fresh [`CartView`] after
    /// every command that changes the cart or the panel.
    pub fn subscribe(&mut self, subscriber: impl Fn(&CartView) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.panel_open
    }

    /// The current view.
    pub fn view(&self) -> CartView {
        CartView::project(&self.cart, self.panel_open, &self.config)
    }

    /// Apply a user intent.
    pub fn dispatch(&mut self, command: CartCommand) -> Transition {
        tracing::debug!(?command, "cart dispatch");

        let transition = match command {
            CartCommand::Add(product) => self.apply_add(product),
            CartCommand::Increment(id) => self.apply_update(&id, 1),
            CartCommand::Decrement(id) => self.apply_update(&id, -1),
            CartCommand::UpdateQuantity { id, delta } => self.apply_update(&id, delta),
            CartCommand::Remove(id) => {
                let transition = self.apply_remove(&id);
                if transition.cart_changed {
                    let message = self.config.messages.item_removed.clone();
                    self.notify(Notification::info(message));
                }
                transition
            }
            CartCommand::Checkout => self.apply_checkout(),
            CartCommand::Open => self.apply_panel(true),
            CartCommand::Close => self.apply_panel(false),
        };

        if transition.needs_render() {
            self.publish();
        }
        transition
    }

    /// Add one unit of `product`, then open the panel.
    pub fn add_item(&mut self, product: Product) -> Transition {
        self.dispatch(CartCommand::Add(product))
    }

    /// Remove an item; a no-op for an unknown id.
    ///
    /// Unlike [`CartCommand::Remove`], which models the remove control and
    /// also shows a notification, this only mutates and re-renders.
    pub fn remove_item(&mut self, id: &ProductId) -> Transition {
        let transition = self.apply_remove(id);
        if transition.needs_render() {
            self.publish();
        }
        transition
    }

    /// Add `delta` to an item's quantity; zero or below removes it.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> Transition {
        self.dispatch(CartCommand::UpdateQuantity {
            id: id.clone(),
            delta,
        })
    }

    /// Hand the order off. `None` for an empty cart.
    ///
    /// The cart is not cleared, so the customer can retry if the
    /// messaging app never opened.
    pub fn checkout(&mut self) -> Option<CheckoutLink> {
        self.dispatch(CartCommand::Checkout).open_link
    }

    pub fn open(&mut self) -> Transition {
        self.dispatch(CartCommand::Open)
    }

    pub fn close(&mut self) -> Transition {
        self.dispatch(CartCommand::Close)
    }

    /// Sum of `unit_price * quantity`.
    pub fn compute_total(&self) -> i64 {
        self.cart.total()
    }

    /// Sum of quantities, shown on the badge.
    pub fn compute_count(&self) -> i64 {
        self.cart.count()
    }

    fn apply_add(&mut self, product: Product) -> Transition {
        let name = product.name.clone();
        let quantity = self.cart.add(product);
        tracing::debug!(%name, quantity, "item added");
        self.save();

        let message = self.config.messages.item_added_for(&name);
        self.notify(Notification::success(message));

        let panel_changed = !self.panel_open;
        self.panel_open = true;
        Transition {
            cart_changed: true,
            panel_changed,
            panel_open: true,
            open_link: None,
        }
    }

    fn apply_remove(&mut self, id: &ProductId) -> Transition {
        if !self.cart.remove(id) {
            return Transition::unchanged(self.panel_open);
        }
        tracing::debug!(%id, "item removed");
        self.save();
        Transition {
            cart_changed: true,
            ..Transition::unchanged(self.panel_open)
        }
    }

    fn apply_update(&mut self, id: &ProductId, delta: i64) -> Transition {
        match self.cart.update_quantity(id, delta) {
            QuantityChange::Missing => return Transition::unchanged(self.panel_open),
            QuantityChange::Updated(quantity) => {
                tracing::debug!(%id, quantity, "quantity updated")
            }
            QuantityChange::Removed => tracing::debug!(%id, "item removed"),
        }
        self.save();
        Transition {
            cart_changed: true,
            ..Transition::unchanged(self.panel_open)
        }
    }

    fn apply_checkout(&mut self) -> Transition {
        let Some(link) = CheckoutLink::for_cart(&self.cart, &self.config) else {
            return Transition::unchanged(self.panel_open);
        };

        tracing::info!(
            items = self.cart.len(),
            total = self.cart.total(),
            "checkout handed off"
        );
        let message = self.config.messages.checkout_redirect.clone();
        self.notify(Notification::success(message));

        Transition {
            open_link: Some(link),
            ..Transition::unchanged(self.panel_open)
        }
    }

    fn apply_panel(&mut self, open: bool) -> Transition {
        let panel_changed = self.panel_open != open;
        self.panel_open = open;
        Transition {
            panel_changed,
            ..Transition::unchanged(open)
        }
    }

    fn save(&self) {
        if let Err(e) = self.cache.set(&self.config.storage_key, &self.cart) {
            tracing::warn!(error = %e, key = %self.config.storage_key, "failed to persist cart");
        }
    }

    fn notify(&self, notification: Notification) {
        match &self.notifier {
            Some(notifier) => notifier.notify(notification),
            None => tracing::trace!(message = %notification.message, "no notifier, skipped"),
        }
    }

    fn publish(&self) {
        if self.subscribers.is_empty() {
            return;
        }
        let view = self.view();
        for subscriber in &self.subscribers {
            subscriber(&view);
        }
    }
}

fn load_cart<S: KvStore>(cache: &Cache<S>, key: &str) -> Cart {
    let stored = match cache.get::<Vec<serde_json::Value>>(key) {
        Ok(Some(stored)) => stored,
        Ok(None) => return Cart::new(),
        Err(e) => {
            tracing::warn!(error = %e, key, "stored cart unreadable, starting empty");
            return Cart::new();
        }
    };

    // One bad record (e.g. a `null` price) drops that item, not the cart.
    let items = stored
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<LineItem>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(error = %e, key, "skipping unreadable cart item");
                None
            }
        })
        .collect();
    Cart::from_items(items)
}
