//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use marketplace_catalog::Catalog;

use crate::config::StorefrontConfig;
use crate::frontend::add_product::AddProductPage;
use crate::frontend::home::HomePage;
use crate::frontend::navigation::Navigation;
use crate::frontend::pages::{CartPage, FavoritesPage, LoginPage, NotFoundPage, ProductDetailPage, ProfilePage};
use crate::routes::{AppRoute, paths};
use crate::session::{ProductIntent, Session};

/// State shared with every page through context.
#[derive(Clone, Copy)]
pub struct StoreContext {
    pub session: RwSignal<Session>,
    pub catalog: StoredValue<Catalog>,
    pub config: StoredValue<StorefrontConfig>,
}

impl StoreContext {
    /// Apply a card intent; returns where to navigate, if anywhere.
    pub fn dispatch(&self, intent: ProductIntent) -> Option<AppRoute> {
        self.session
            .try_update(|session| session.apply(intent))
            .and_then(|outcome| outcome.into_route())
    }

    pub fn currency_symbol(&self) -> String {
        self.config.with_value(|c| c.currency_symbol.clone())
    }
}

pub fn use_store() -> StoreContext {
    expect_context::<StoreContext>()
}

/// Card intent handler that follows navigation outcomes.
///
/// Must be created inside the router (it captures `use_navigate`).
pub fn intent_handler(store: StoreContext) -> Callback<ProductIntent> {
    let navigate = use_navigate();
    Callback::new(move |intent: ProductIntent| {
        if let Some(route) = store.dispatch(intent) {
            navigate(&route.path(), Default::default());
        }
    })
}

/// Main application component.
#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    provide_context(StoreContext {
        session: create_rw_signal(Session::new()),
        catalog: store_value(Catalog::mock()),
        config: store_value(config),
    });

    view! {
        <Router>
            <Navigation/>
            <main>
                <Routes>
                    <Route path=paths::HOME view=HomePage/>
                    <Route path=paths::ADD_PRODUCT view=AddProductPage/>
                    <Route path=paths::FAVORITES view=FavoritesPage/>
                    <Route path=paths::CART view=CartPage/>
                    <Route path=paths::PROFILE view=ProfilePage/>
                    <Route path=paths::LOGIN view=LoginPage/>
                    <Route path=paths::PRODUCT_DETAIL view=ProductDetailPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </main>
        </Router>
    }
}
