//! Product card: image, badges, favorite toggle, price, add-to-cart.

use leptos::*;

use marketplace_catalog::Product;

use crate::frontend::app::use_store;
use crate::presentation::ProductCardView;
use crate::session::ProductIntent;

#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)] is_favorite: Signal<bool>,
    on_intent: Callback<ProductIntent>,
) -> impl IntoView {
    let card = ProductCardView::from_product(&product, &use_store().currency_symbol());

    let open = {
        let id = card.id.clone();
        move |_| on_intent.call(ProductIntent::OpenDetail(id.clone()))
    };
    let toggle_favorite = {
        let id = card.id.clone();
        move |ev: ev::MouseEvent| {
            ev.stop_propagation();
            on_intent.call(ProductIntent::ToggleFavorite(id.clone()));
        }
    };
    let add_to_cart = {
        let id = card.id.clone();
        move |ev: ev::MouseEvent| {
            ev.stop_propagation();
            on_intent.call(ProductIntent::AddToCart(id.clone()));
        }
    };

    view! {
        <div class="glass-card product-card animate-fade-in" on:click=open>
            <div class="product-media">
                <img src=card.image_src.clone() alt=card.title.clone()/>

                <div class="badges">
                    {card.is_new.then(|| view! { <span class="badge badge-new">"New"</span> })}
                    <span class="badge badge-outline">{card.category_label}</span>
                </div>

                <button
                    type="button"
                    class="btn favorite-toggle"
                    aria-label="Toggle favorite"
                    aria-pressed=move || is_favorite.get().to_string()
                    on:click=toggle_favorite
                >
                    <span class=move || if is_favorite.get() { "heart heart-filled" } else { "heart" }>"♥"</span>
                </button>

                <div class="quick-actions">
                    <button type="button" class="btn btn-secondary" on:click=add_to_cart.clone()>
                        "🛒 Add to Cart"
                    </button>
                </div>
            </div>

            <div class="product-body">
                <h3 class="product-title">{card.title.clone()}</h3>

                {card.rating_label.clone().map(|rating| view! {
                    <div class="rating">
                        <span class="star">"★"</span>
                        <span class="muted">{rating}</span>
                    </div>
                })}

                <div class="price-row">
                    <span class="price">{card.price_label.clone()}</span>
                    <button type="button" class="btn btn-ghost" aria-label="Add to cart" on:click=add_to_cart>
                        "🛒"
                    </button>
                </div>
            </div>
        </div>
    }
}
