//! Home page: hero, search box, category chips, product grid.

use leptos::*;
use leptos_router::*;

use marketplace_catalog::{CategoryFilter, Product, ProductQuery};
use marketplace_core::Entity;

use crate::frontend::app::{intent_handler, use_store};
use crate::frontend::product_card::ProductCard;
use crate::presentation::{ListingHeader, stagger_delay};
use crate::routes::{self, AppRoute, paths};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_store();
    let on_intent = intent_handler(store);

    let query_map = use_query_map();
    let query = create_rw_signal(ProductQuery::default());

    // The navigation bar search lands here as `/?q=...`.
    create_effect(move |_| {
        let text = query_map.with(|m| routes::search_text(m.get(paths::SEARCH_PARAM).map(String::as_str)));
        query.update(|q| q.set_text(text));
    });

    let results = create_memo(move |_| {
        query.with(|q| {
            store
                .catalog
                .with_value(|c| c.search(q).into_iter().cloned().collect::<Vec<Product>>())
        })
    });
    let header = move || query.with(|q| ListingHeader::new(q, results.with(Vec::len)));

    view! {
        <section class="hero">
            <div class="hero-backdrop"></div>
            <div class="container hero-content">
                <h1 class="hero-title">
                    "Discover Amazing"
                    <span class="gradient-text block">"Products"</span>
                </h1>
                <p class="muted hero-lead">
                    "Your one-stop marketplace for everything you need. Buy, sell, and discover "
                    "unique products from trusted sellers worldwide."
                </p>
                <div class="hero-actions">
                    <a href="#products" class="btn btn-primary btn-lg">"Shop Now"</a>
                    <A href=AppRoute::AddProduct.path() class="btn btn-glass btn-lg">
                        "+ Start Selling"
                    </A>
                </div>
            </div>
        </section>

        <section class="filters">
            <div class="container filters-row">
                <div class="search">
                    <span class="search-icon">"⌕"</span>
                    <input
                        type="search"
                        class="glass-input"
                        placeholder="Search products..."
                        prop:value=move || query.with(|q| q.text().to_string())
                        on:input=move |ev| query.update(|q| q.set_text(event_target_value(&ev)))
                    />
                </div>

                <div class="chips">
                    {CategoryFilter::chips()
                        .map(|chip| {
                            let active = move || query.with(|q| q.category() == chip);
                            view! {
                                <button
                                    type="button"
                                    class=move || if active() { "chip chip-active" } else { "chip btn-glass" }
                                    on:click=move |_| query.update(|q| q.set_category(chip))
                                >
                                    {chip.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section id="products" class="products">
            <div class="container">
                <div class="products-header">
                    <h2>{move || header().heading}</h2>
                    <p class="muted">{move || header().count_label}</p>
                </div>

                {move || {
                    if header().is_empty {
                        view! {
                            <div class="empty-state glass-card">
                                <span class="empty-icon">"⌕"</span>
                                <h3>"No products found"</h3>
                                <p class="muted">"Try adjusting your search or filters"</p>
                                <button type="button" class="btn btn-outline" on:click=move |_| query.update(|q| q.clear())>
                                    "Clear Filters"
                                </button>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="product-grid">
                                {results
                                    .get()
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
        </section>

        <A href=AppRoute::AddProduct.path() class="fab mobile-only">
            <span class="btn btn-primary btn-round">"+"</span>
        </A>
    }
}
