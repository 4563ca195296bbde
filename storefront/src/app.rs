//! Application components.

use std::time::Duration;

use inkshop_commerce::cart::{CartCommand, CartManager, CartView};
use inkshop_commerce::checkout::CheckoutLink;
use inkshop_commerce::contact::{ContactForm, ContactOutcome, ContactValidator};
use inkshop_commerce::gallery::{Gallery, GalleryCommand, GalleryImage};
use inkshop_commerce::navigation::{scroll_target, ScrollState, SectionBounds};
use inkshop_commerce::notify::{Notification, Notifier};
use inkshop_commerce::{Currency, Money, ProductId, ShopConfig};
use leptos::prelude::*;
use web_sys::wasm_bindgen::JsCast;

use crate::catalog::{Catalog, CatalogEntry};
use crate::store::PageStore;
use crate::toast::{ToastHost, ToastNotifier};

/// How long the simulated contact delivery takes.
const CONTACT_SEND_MS: u64 = 1500;

/// Shown for gallery tiles without a photo.
const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22 width=%22800%22 height=%22600%22%3E%3Crect fill=%22%23333%22 width=%22800%22 height=%22600%22/%3E%3Ctext fill=%22%23fff%22 font-size=%2224%22 x=%2250%25%22 y=%2250%25%22 text-anchor=%22middle%22 dy=%22.3em%22%3EGallery Image%3C/text%3E%3C/svg%3E";

// ============================================================================
// Cart handle
// ============================================================================

/// The page's cart manager plus the signal its renders land in.
///
/// Created once in [`App`] and shared through context.
#[derive(Clone, Copy)]
struct CartHandle {
    manager: StoredValue<CartManager<PageStore>, LocalStorage>,
    view: ReadSignal<CartView>,
}

impl CartHandle {
    fn new(store: PageStore, config: ShopConfig, notifier: ToastNotifier) -> Self {
        let mut manager = CartManager::load(store, config).with_notifier(notifier);
        let (view, set_view) = signal(manager.view());
        manager.subscribe(move |fresh| set_view.set(fresh.clone()));

        Self {
            manager: StoredValue::new_local(manager),
            view,
        }
    }

    fn dispatch(&self, command: CartCommand) {
        let Some(transition) = self.manager.try_update_value(|m| m.dispatch(command)) else {
            return;
        };
        if let Some(link) = transition.open_link {
            open_link(&link);
        }
    }
}

fn open_link(link: &CheckoutLink) {
    if let Err(e) = window().open_with_url_and_target(link.url(), CheckoutLink::TARGET) {
        leptos::logging::warn!("could not open checkout link: {e:?}");
    }
}

/// `overflow` for the page body: locked while any overlay is up.
fn page_overflow(cart_open: bool, lightbox_open: bool) -> &'static str {
    if cart_open || lightbox_open {
        "hidden"
    } else {
        ""
    }
}

fn set_page_overflow(value: &str) {
    let Some(body) = document().body() else {
        return;
    };
    if let Err(e) = body.style().set_property("overflow", value) {
        leptos::logging::warn!("could not set page overflow: {e:?}");
    }
}

fn use_cart() -> CartHandle {
    expect_context::<CartHandle>()
}

// ============================================================================
// Gallery handle
// ============================================================================

#[derive(Clone, Copy)]
struct GalleryHandle {
    gallery: RwSignal<Gallery>,
}

impl GalleryHandle {
    fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            gallery: RwSignal::new(Gallery::new(images)),
        }
    }

    fn dispatch(&self, command: GalleryCommand) {
        self.gallery.maybe_update(|g| g.dispatch(command));
    }

    fn is_open(&self) -> bool {
        self.gallery.with(|g| g.is_open())
    }
}

fn use_gallery() -> GalleryHandle {
    expect_context::<GalleryHandle>()
}

// ============================================================================
// Scroll helpers
// ============================================================================

fn header_height(document: &web_sys::Document) -> f64 {
    document
        .query_selector("header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0)
}

fn section_bounds(document: &web_sys::Document) -> Vec<SectionBounds> {
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| {
            SectionBounds::new(
                el.id(),
                f64::from(el.offset_top()),
                f64::from(el.offset_height()),
            )
        })
        .collect()
}

fn read_scroll_state() -> ScrollState {
    let document = document();
    let scroll_y = window().scroll_y().unwrap_or(0.0);
    ScrollState::at(scroll_y, header_height(&document), &section_bounds(&document))
}

fn smooth_scroll_to(top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

fn scroll_to_section(id: &str) {
    let document = document();
    let Some(section) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    smooth_scroll_to(scroll_target(
        f64::from(section.offset_top()),
        header_height(&document),
    ));
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    let config = ShopConfig::from_toml_str(include_str!("../shop.toml")).unwrap_or_else(|e| {
        leptos::logging::warn!("shop.toml rejected, using defaults: {e}");
        ShopConfig::default()
    });
    let catalog = Catalog::from_toml_str(include_str!("../catalog.toml")).unwrap_or_else(|e| {
        leptos::logging::warn!("catalog.toml rejected, showing no products: {e}");
        Catalog::default()
    });

    let notifier = ToastNotifier::new(config.notification_dismiss_ms);
    let store = PageStore::open();
    let cart = CartHandle::new(store.clone(), config.clone(), notifier);
    provide_context(cart);
    let gallery = GalleryHandle::new(catalog.gallery);
    provide_context(gallery);

    Effect::new(move |_| {
        let cart_open = cart.view.with(|v| v.panel_open);
        set_page_overflow(page_overflow(cart_open, gallery.is_open()));
    });

    let scroll = RwSignal::new(ScrollState::default());
    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        let next = read_scroll_state();
        scroll.update(|state| {
            // Between sections the last highlight stays.
            let active_section = next.active_section.or_else(|| state.active_section.take());
            *state = ScrollState {
                active_section,
                ..next
            };
        });
    });

    let _ = window_event_listener(leptos::ev::keydown, move |ev| {
        if !gallery.gallery.with_untracked(|g| g.is_open()) {
            return;
        }
        if let Some(command) = GalleryCommand::from_key(&ev.key()) {
            gallery.dispatch(command);
        }
    });

    view! {
        <Header scroll=scroll/>
        <main>
            <section id="shop">
                <h2>"Ponuda"</h2>
                <ProductGrid products=catalog.products currency=config.currency/>
            </section>
            <GallerySection/>
            <ContactSection store=store config=config.clone() notifier=notifier/>
        </main>
        <CartPanel config=config/>
        <Lightbox/>
        <ScrollTopButton scroll=scroll/>
        <ToastHost notifier=notifier/>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

const NAV_LINKS: [(&str, &str); 3] = [("shop", "Ponuda"), ("gallery", "Galerija"), ("contact", "Kontakt")];

#[component]
fn Header(scroll: RwSignal<ScrollState>) -> impl IntoView {
    let cart = use_cart();
    let menu_open = RwSignal::new(false);
    let count = move || cart.view.with(|v| v.badge.count);
    let badge_display = move || {
        if cart.view.with(|v| v.badge.visible) {
            "flex"
        } else {
            "none"
        }
    };

    view! {
        <header class:scrolled=move || scroll.with(|s| s.header_scrolled)>
            <a class="logo" href="#">"Ink Studio"</a>
            <nav class="nav-links" class:active=move || menu_open.get()>
                {NAV_LINKS
                    .into_iter()
                    .map(|(id, label)| {
                        let is_active = move || {
                            scroll.with(|s| s.active_section.as_deref() == Some(id))
                        };
                        view! {
                            <a
                                href=format!("#{id}")
                                class:active=is_active
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    menu_open.set(false);
                                    scroll_to_section(id);
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <button
                class="hamburger"
                class:active=move || menu_open.get()
                aria-label="Meni"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <button
                class="cart-icon"
                aria-label="Korpa"
                on:click=move |_| cart.dispatch(CartCommand::Open)
            >
                "🛒"
                <span class="cart-count" style:display=badge_display>{count}</span>
            </button>
        </header>
    }
}

#[component]
fn ScrollTopButton(scroll: RwSignal<ScrollState>) -> impl IntoView {
    view! {
        <button
            class="scroll-to-top"
            class:visible=move || scroll.with(|s| s.show_scroll_top)
            aria-label="Scroll to top"
            on:click=move |_| smooth_scroll_to(0.0)
        >
            "↑"
        </button>
    }
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
fn ProductGrid(products: Vec<CatalogEntry>, currency: Currency) -> impl IntoView {
    view! {
        <div class="products">
            {products
                .into_iter()
                .map(|entry| view! { <ProductCard entry=entry currency=currency/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductCard(entry: CatalogEntry, currency: Currency) -> impl IntoView {
    let cart = use_cart();
    let price = Money::new(entry.price, currency).display();
    let product = entry.to_product();

    view! {
        <div class="product-card" data-id=entry.id.clone() data-price=entry.price.to_string()>
            <div class="product-icon">{entry.icon.clone()}</div>
            <h3>{entry.name.clone()}</h3>
            <p>{entry.description.clone()}</p>
            <p class="price">{price}</p>
            <button
                class="add-to-cart btn"
                on:click=move |_| cart.dispatch(CartCommand::Add(product.clone()))
            >
                "Dodaj u korpu"
            </button>
        </div>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
fn CartPanel(config: ShopConfig) -> impl IntoView {
    let cart = use_cart();
    let open = move || cart.view.with(|v| v.panel_open);
    let messages = config.messages;

    view! {
        <div class="cart-sidebar" class:active=open>
            <div class="cart-header">
                <h3>{messages.cart_title}</h3>
                <button
                    class="close-cart"
                    aria-label="Zatvori korpu"
                    on:click=move |_| cart.dispatch(CartCommand::Close)
                >
                    "×"
                </button>
            </div>
            <div class="cart-items-container">
                {move || {
                    cart.view
                        .with(|v| match &v.empty_message {
                            Some(empty) => {
                                view! {
                                    <div class="cart-empty">
                                        <div class="cart-empty-icon">"🛒"</div>
                                        <p>{empty.clone()}</p>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                v.rows
                                    .iter()
                                    .map(|row| {
                                        view! {
                                            <CartRowView
                                                id=row.id.clone()
                                                icon=row.icon.clone()
                                                name=row.name.clone()
                                                price=row.price_display.clone()
                                                quantity=row.quantity
                                            />
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        })
                }}
            </div>
            <div class="cart-footer">
                <div class="cart-total">
                    <span>{format!("{}:", messages.total_label)}</span>
                    <span class="total-amount">{move || cart.view.with(|v| v.total_display.clone())}</span>
                </div>
                <button
                    class="checkout-btn"
                    disabled=move || !cart.view.with(|v| v.checkout_enabled)
                    on:click=move |_| cart.dispatch(CartCommand::Checkout)
                >
                    {messages.checkout_button}
                </button>
            </div>
        </div>
        <div
            class="cart-overlay"
            class:active=open
            on:click=move |_| cart.dispatch(CartCommand::Close)
        ></div>
    }
}

#[component]
fn CartRowView(
    id: ProductId,
    icon: String,
    name: String,
    price: String,
    quantity: i64,
) -> impl IntoView {
    let cart = use_cart();
    let minus = id.clone();
    let plus = id.clone();

    view! {
        <div class="cart-item">
            <div class="cart-item-icon">{icon}</div>
            <div class="cart-item-details">
                <div class="cart-item-name">{name}</div>
                <div class="cart-item-price">{price}</div>
                <div class="cart-item-controls">
                    <button
                        class="qty-btn qty-minus"
                        on:click=move |_| cart.dispatch(CartCommand::Decrement(minus.clone()))
                    >
                        "−"
                    </button>
                    <span class="cart-item-quantity">{quantity}</span>
                    <button
                        class="qty-btn qty-plus"
                        on:click=move |_| cart.dispatch(CartCommand::Increment(plus.clone()))
                    >
                        "+"
                    </button>
                    <button
                        class="remove-item"
                        on:click=move |_| cart.dispatch(CartCommand::Remove(id.clone()))
                    >
                        "🗑️"
                    </button>
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// Gallery Components
// ============================================================================

#[component]
fn GallerySection() -> impl IntoView {
    let gallery = use_gallery();
    let images = gallery.gallery.with_untracked(|g| g.images().to_vec());

    view! {
        <section id="gallery">
            <h2>"Galerija"</h2>
            <div class="gallery-grid">
                {images
                    .into_iter()
                    .enumerate()
                    .map(|(index, image)| {
                        let tile = match image.src {
                            Some(src) => view! { <img src=src alt=image.alt/> }.into_any(),
                            None => view! { <span>{image.caption}</span> }.into_any(),
                        };
                        view! {
                            <div
                                class="gallery-item"
                                on:click=move |_| gallery.dispatch(GalleryCommand::Open(index))
                            >
                                {tile}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Lightbox() -> impl IntoView {
    let gallery = use_gallery();
    let touch_start_x = StoredValue::new(0.0_f64);

    let src = move || {
        gallery.gallery.with(|g| {
            g.current_image()
                .and_then(|image| image.src.clone())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
        })
    };
    let alt = move || {
        gallery
            .gallery
            .with(|g| g.current_image().map(|image| image.alt.clone()).unwrap_or_default())
    };
    let caption = move || {
        gallery
            .gallery
            .with(|g| g.current_image().map(|image| image.caption.clone()).unwrap_or_default())
    };
    let counter = move || gallery.gallery.with(|g| g.counter().unwrap_or_default());

    let first_touch_x = |ev: &leptos::ev::TouchEvent| {
        ev.changed_touches().get(0).map(|touch| f64::from(touch.screen_x()))
    };

    view! {
        <div
            class="lightbox-overlay"
            class:active=move || gallery.is_open()
            on:click=move |_| gallery.dispatch(GalleryCommand::Close)
        >
            <div
                class="lightbox-content"
                on:click=|ev| ev.stop_propagation()
                on:touchstart=move |ev| {
                    if let Some(x) = first_touch_x(&ev) {
                        touch_start_x.set_value(x);
                    }
                }
                on:touchend=move |ev| {
                    let Some(end_x) = first_touch_x(&ev) else {
                        return;
                    };
                    if let Some(command) = GalleryCommand::from_swipe(touch_start_x.get_value(), end_x) {
                        gallery.dispatch(command);
                    }
                }
            >
                <button
                    class="lightbox-close"
                    aria-label="Zatvori"
                    on:click=move |_| gallery.dispatch(GalleryCommand::Close)
                >
                    "×"
                </button>
                <button
                    class="lightbox-prev"
                    aria-label="Prethodna"
                    on:click=move |_| gallery.dispatch(GalleryCommand::Prev)
                >
                    "‹"
                </button>
                <button
                    class="lightbox-next"
                    aria-label="Sledeća"
                    on:click=move |_| gallery.dispatch(GalleryCommand::Next)
                >
                    "›"
                </button>
                <img class="lightbox-image" src=src alt=alt/>
                <div class="lightbox-caption">{caption}</div>
                <div class="lightbox-counter">{counter}</div>
            </div>
        </div>
    }
}

// ============================================================================
// Contact Components
// ============================================================================

#[component]
fn ContactSection(store: PageStore, config: ShopConfig, notifier: ToastNotifier) -> impl IntoView {
    let validator = StoredValue::new_local(ContactValidator::new(store, &config));
    let config = StoredValue::new(config);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let service = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let honeypot = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let reset = move || {
        for field in [name, email, phone, service, message, honeypot] {
            field.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }

        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            service: service.get_untracked(),
            message: message.get_untracked(),
            honeypot: honeypot.get_untracked(),
        };
        let now_ms = js_sys::Date::now() as u64;
        let Some(outcome) = validator.try_with_value(|v| v.submit(&form, now_ms)) else {
            return;
        };

        match outcome {
            ContactOutcome::Spam => {}
            ContactOutcome::Rejected(rejection) => {
                let text = config.with_value(|c| rejection.message(c).to_string());
                notifier.notify(Notification::error(text));
            }
            ContactOutcome::Accepted(_contact) => {
                // No backend yet: the message is acknowledged locally.
                sending.set(true);
                set_timeout(
                    move || {
                        let text = config.with_value(|c| c.messages.contact_sent.clone());
                        notifier.notify(Notification::success(text));
                        reset();
                        sending.set(false);
                    },
                    Duration::from_millis(CONTACT_SEND_MS),
                );
            }
        }
    };

    view! {
        <section id="contact">
            <h2>"Kontakt"</h2>
            <form class="contact-form" on:submit=on_submit>
                <input type="text" placeholder="Ime" bind:value=name required/>
                <input type="email" placeholder="Email" bind:value=email required/>
                <input type="tel" placeholder="Telefon" bind:value=phone/>
                <select bind:value=service>
                    <option value="">"Izaberite uslugu"</option>
                    <option value="tattoo">"Tetovaža"</option>
                    <option value="cover-up">"Cover-up"</option>
                    <option value="consultation">"Konsultacija"</option>
                </select>
                <textarea placeholder="Poruka" bind:value=message></textarea>
                <input
                    type="text"
                    class="honeypot"
                    tabindex="-1"
                    autocomplete="off"
                    style="position: absolute; left: -9999px;"
                    bind:value=honeypot
                />
                <button type="submit" class="btn" disabled=move || sending.get()>
                    {move || if sending.get() { "Šalje se..." } else { "Pošalji poruku" }}
                </button>
            </form>
        </section>
    }
}
