//! Secondary pages: favorites, cart, product detail, and placeholders.

use leptos::*;
use leptos_router::*;

use marketplace_catalog::Product;
use marketplace_core::{Entity, ProductId};

use crate::frontend::app::{intent_handler, use_store};
use crate::frontend::product_card::ProductCard;
use crate::presentation::{ProductCardView, cart_rows, cart_total_label, stagger_delay};
use crate::routes::{AppRoute, decode_product_segment};
use crate::session::ProductIntent;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let store = use_store();
    let on_intent = intent_handler(store);

    let liked = create_memo(move |_| {
        store.session.with(|s| {
            store.catalog.with_value(|c| {
                s.favorites()
                    .iter()
                    .filter_map(|id| c.get(id).cloned())
                    .collect::<Vec<Product>>()
            })
        })
    });

    view! {
        <div class="container page">
            <h1>"Favorites"</h1>
            {move || {
                let products = liked.get();
                if products.is_empty() {
                    view! {
                        <div class="empty-state glass-card">
                            <h3>"No favorites yet"</h3>
                            <p class="muted">"Tap the heart on a product to save it here"</p>
                            <A href=AppRoute::Home.path() class="btn btn-outline">"Browse products"</A>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="product-grid">
                            {products
                                .into_iter()
                                .enumerate()
                                .map(|(index, product)| {
                                    let id = product.id().clone();
                                    let is_favorite = Signal::derive(move || store.session.with(|s| s.is_favorite(&id)));
                                    view! {
                                        <div style=stagger_delay(index)>
                                            <ProductCard product=product is_favorite=is_favorite on_intent=on_intent/>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    let store = use_store();
    let currency = store.currency_symbol();

    let rows = {
        let currency = currency.clone();
        move || store.session.with(|s| store.catalog.with_value(|c| cart_rows(s.cart(), c, &currency)))
    };
    let total = move || store.session.with(|s| store.catalog.with_value(|c| cart_total_label(s.cart(), c, &currency)));

    let set_quantity = move |id: ProductId, quantity: u32| {
        store.session.update(|s| s.cart_mut().set_quantity(&id, quantity));
    };
    let decrement = move |id: ProductId| {
        store.session.update(|s| {
            s.cart_mut().decrement(&id);
        });
    };

    view! {
        <div class="container narrow page">
            <h1>"Cart"</h1>
            {move || {
                let rows = rows();
                if rows.is_empty() {
                    view! {
                        <div class="empty-state glass-card">
                            <h3>"Your cart is empty"</h3>
                            <A href=AppRoute::Home.path() class="btn btn-outline">"Continue shopping"</A>
                        </div>
                    }
                    .into_view()
                } else {
                    rows.into_iter()
                        .map(|row| {
                            let dec_id = row.product_id.clone();
                            let inc_id = row.product_id.clone();
                            let remove_id = row.product_id.clone();
                            let quantity = row.quantity;
                            view! {
                                <div class="cart-row glass-card">
                                    <img src=row.image_src alt=row.title.clone() class="cart-thumb"/>
                                    <div class="grow">
                                        <h3>{row.title}</h3>
                                        <p class="muted">{row.unit_price_label}</p>
                                    </div>
                                    <div class="stepper">
                                        <button type="button" class="btn btn-ghost" on:click=move |_| decrement(dec_id.clone())>"−"</button>
                                        <span>{quantity}</span>
                                        <button type="button" class="btn btn-ghost" on:click=move |_| set_quantity(inc_id.clone(), quantity.saturating_add(1))>"+"</button>
                                    </div>
                                    <span class="price">{row.subtotal_label}</span>
                                    <button type="button" class="btn btn-ghost" aria-label="Remove" on:click=move |_| set_quantity(remove_id.clone(), 0)>"✕"</button>
                                </div>
                            }
                        })
                        .collect_view()
                }
            }}
            {move || total().filter(|_| store.session.with(|s| !s.cart().is_empty())).map(|label| view! {
                <div class="cart-total">
                    <span>"Total"</span>
                    <span class="price">{label}</span>
                    <button
                        type="button"
                        class="btn btn-outline"
                        on:click=move |_| store.session.update(|s| s.cart_mut().clear())
                    >
                        "Clear Cart"
                    </button>
                </div>
            })}
        </div>
    }
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let store = use_store();
    let on_intent = intent_handler(store);
    let currency = store.currency_symbol();
    let params = use_params_map();

    let product = create_memo(move |_| {
        let id = params.with(|p| p.get("id").and_then(|raw| decode_product_segment(raw)))?;
        store.catalog.with_value(|c| match c.require(&id) {
            Ok(product) => Some(product.clone()),
            Err(e) => {
                tracing::debug!(product_id = %id, error = %e, "detail lookup missed");
                None
            }
        })
    });

    view! {
        <div class="container narrow page">
            <A href=AppRoute::Home.path() class="btn btn-ghost btn-glass">"← Back"</A>
            {move || match product.get() {
                None => view! {
                    <div class="empty-state glass-card">
                        <h3>"Product not found"</h3>
                    </div>
                }
                .into_view(),
                Some(product) => {
                    let card = ProductCardView::from_product(&product, &currency);
                    let fav_id = card.id.clone();
                    let toggle_id = card.id.clone();
                    let cart_id = card.id.clone();
                    let in_cart_id = card.id.clone();
                    let is_favorite = move || store.session.with(|s| s.is_favorite(&fav_id));
                    let in_cart = move || store.session.with(|s| s.cart().quantity_of(&in_cart_id));
                    view! {
                        <article class="detail glass-card">
                            <img src=card.image_src.clone() alt=card.title.clone() class="detail-image"/>
                            <div class="detail-body">
                                <div class="badges">
                                    {card.is_new.then(|| view! { <span class="badge badge-new">"New"</span> })}
                                    <span class="badge badge-outline">{card.category_label}</span>
                                </div>
                                <h1>{card.title.clone()}</h1>
                                {card.rating_label.clone().map(|r| view! { <p class="rating">"★ " {r}</p> })}
                                <p class="price">{card.price_label.clone()}</p>
                                {move || {
                                    let quantity = in_cart();
                                    (quantity > 0).then(|| view! { <p class="muted">{format!("{quantity} in cart")}</p> })
                                }}
                                <div class="form-actions">
                                    <button
                                        type="button"
                                        class="btn btn-primary grow"
                                        on:click=move |_| on_intent.call(ProductIntent::AddToCart(cart_id.clone()))
                                    >
                                        "Add to Cart"
                                    </button>
                                    <button
                                        type="button"
                                        class="btn btn-outline"
                                        on:click=move |_| on_intent.call(ProductIntent::ToggleFavorite(toggle_id.clone()))
                                    >
                                        {move || if is_favorite() { "♥ Saved" } else { "♡ Save" }}
                                    </button>
                                </div>
                            </div>
                        </article>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! { <Placeholder title="Profile" body="Account settings are not available yet."/> }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <Placeholder title="Login" body="Sign-in is not available yet."/> }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <Placeholder title="Page not found" body="The page you are looking for does not exist."/> }
}

#[component]
fn Placeholder(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="container narrow page">
            <div class="empty-state glass-card">
                <h1>{title}</h1>
                <p class="muted">{body}</p>
                <A href=AppRoute::Home.path() class="btn btn-outline">"Back to shop"</A>
            </div>
        </div>
    }
}
