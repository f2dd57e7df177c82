//! Sticky top bar: logo, search, links, mobile menu.

use leptos::*;
use leptos_router::*;

use crate::frontend::app::use_store;
use crate::routes::{self, AppRoute, NavItem, nav_items};

#[component]
pub fn Navigation() -> impl IntoView {
    let store = use_store();
    let brand = store.config.with_value(|c| c.brand.clone());
    let menu_open = create_rw_signal(false);
    let search = create_rw_signal(String::new());
    let cart_count = move || store.session.with(|s| s.cart().item_count());

    let navigate = use_navigate();
    let submit_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        navigate(&routes::home_with_query(&search.get_untracked()), Default::default());
        menu_open.set(false);
    };

    view! {
        <nav class="nav glass-card">
            <div class="container nav-bar">
                <A href=AppRoute::Home.path() class="logo">
                    <span class="logo-mark">"🛍"</span>
                    <span class="logo-text gradient-text">{brand}</span>
                </A>

                <form class="nav-search desktop-only" on:submit=submit_search.clone()>
                    <SearchInput search=search/>
                </form>

                <div class="nav-links desktop-only">
                    {nav_items()
                        .into_iter()
                        .map(|item| view! { <DesktopLink item=item cart_count=Signal::derive(cart_count)/> })
                        .collect_view()}
                </div>

                <button
                    type="button"
                    class="btn btn-ghost mobile-only"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <form class="container nav-search mobile-only" on:submit=submit_search>
                <SearchInput search=search/>
            </form>

            <Show when=move || menu_open.get()>
                <div class="container mobile-menu mobile-only" on:click=move |_| menu_open.set(false)>
                    {nav_items()
                        .into_iter()
                        .map(|item| {
                            let class = if item.primary { "btn btn-primary block" } else { "btn btn-ghost block" };
                            view! {
                                <A href=item.route.path() class=class>
                                    {item.icon.map(|icon| view! { <span class="icon">{icon.glyph()}</span> })}
                                    {item.mobile_label}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn SearchInput(search: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="search">
            <span class="search-icon">"⌕"</span>
            <input
                type="search"
                class="glass-input"
                placeholder="Search products..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn DesktopLink(item: NavItem, cart_count: Signal<u32>) -> impl IntoView {
    let class = if item.primary { "btn btn-primary" } else { "btn btn-ghost" };
    let is_cart = item.route == AppRoute::Cart;
    view! {
        <A href=item.route.path() class=class active_class="active" exact=true>
            {item.icon.map(|icon| view! { <span class="icon">{icon.glyph()}</span> })}
            {item.label}
            {is_cart.then(|| view! {
                <Show when=move || { cart_count.get() > 0 }>
                    <span class="badge badge-count">{move || cart_count.get()}</span>
                </Show>
            })}
        </A>
    }
}
