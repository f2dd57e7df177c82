//! Client-side routes.

use marketplace_core::ProductId;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Route patterns as registered with the router.
pub mod paths {
    pub const HOME: &str = "/";
    pub const ADD_PRODUCT: &str = "/add-product";
    pub const FAVORITES: &str = "/favorites";
    pub const CART: &str = "/cart";
    pub const PROFILE: &str = "/profile";
    pub const LOGIN: &str = "/login";
    pub const PRODUCT_DETAIL: &str = "/product/:id";

    /// Query parameter carrying the navigation bar search text.
    pub const SEARCH_PARAM: &str = "q";
}

const PRODUCT_PREFIX: &str = "/product/";

/// Characters escaped inside one path segment (WHATWG path set plus `/` and `%`).
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Product id as it appears in `/product/:id`.
pub fn encode_product_segment(id: &ProductId) -> String {
    utf8_percent_encode(id.as_str(), SEGMENT).to_string()
}

/// Inverse of [`encode_product_segment`]. `+` stays a literal plus.
pub fn decode_product_segment(raw: &str) -> Option<ProductId> {
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    ProductId::new(decoded.into_owned()).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    AddProduct,
    Favorites,
    Cart,
    Profile,
    Login,
    ProductDetail(ProductId),
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => paths::HOME.to_string(),
            AppRoute::AddProduct => paths::ADD_PRODUCT.to_string(),
            AppRoute::Favorites => paths::FAVORITES.to_string(),
            AppRoute::Cart => paths::CART.to_string(),
            AppRoute::Profile => paths::PROFILE.to_string(),
            AppRoute::Login => paths::LOGIN.to_string(),
            AppRoute::ProductDetail(id) => format!("{PRODUCT_PREFIX}{}", encode_product_segment(id)),
        }
    }

    /// Resolve a location path. Query strings, fragments and a trailing
    /// slash are ignored.
    pub fn parse(location: &str) -> Option<AppRoute> {
        let path = location.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };

        match path {
            paths::HOME => Some(AppRoute::Home),
            paths::ADD_PRODUCT => Some(AppRoute::AddProduct),
            paths::FAVORITES => Some(AppRoute::Favorites),
            paths::CART => Some(AppRoute::Cart),
            paths::PROFILE => Some(AppRoute::Profile),
            paths::LOGIN => Some(AppRoute::Login),
            other => {
                let raw = other.strip_prefix(PRODUCT_PREFIX)?;
                if raw.contains('/') {
                    return None;
                }
                decode_product_segment(raw).map(AppRoute::ProductDetail)
            }
        }
    }
}

/// Home URL carrying a search query (`/?q=...`). An empty query yields `/`.
pub fn home_with_query(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return paths::HOME.to_string();
    }
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(paths::SEARCH_PARAM, query)
        .finish();
    format!("{}?{encoded}", paths::HOME)
}

/// Home search text for the current `q` value. No `q` (a blank navigation
/// search lands on plain `/`) means no text.
pub fn search_text(q: Option<&str>) -> String {
    q.map(str::trim).unwrap_or_default().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Plus,
    Heart,
    Bag,
    User,
}

impl NavIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Plus => "+",
            NavIcon::Heart => "♥",
            NavIcon::Bag => "🛍",
            NavIcon::User => "👤",
        }
    }
}

/// One navigation bar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub route: AppRoute,
    /// Desktop text; `None` renders the icon alone.
    pub label: Option<&'static str>,
    /// Text in the collapsed mobile menu.
    pub mobile_label: &'static str,
    pub icon: Option<NavIcon>,
    /// Rendered as the primary (filled) button.
    pub primary: bool,
}

/// Navigation entries in display order.
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            route: AppRoute::Home,
            label: Some("Home"),
            mobile_label: "Home",
            icon: None,
            primary: false,
        },
        NavItem {
            route: AppRoute::AddProduct,
            label: Some("Sell"),
            mobile_label: "Sell Product",
            icon: Some(NavIcon::Plus),
            primary: false,
        },
        NavItem {
            route: AppRoute::Favorites,
            label: None,
            mobile_label: "Favorites",
            icon: Some(NavIcon::Heart),
            primary: false,
        },
        NavItem {
            route: AppRoute::Cart,
            label: None,
            mobile_label: "Cart",
            icon: Some(NavIcon::Bag),
            primary: false,
        },
        NavItem {
            route: AppRoute::Profile,
            label: None,
            mobile_label: "Profile",
            icon: Some(NavIcon::User),
            primary: false,
        },
        NavItem {
            route: AppRoute::Login,
            label: Some("Login"),
            mobile_label: "Login",
            icon: None,
            primary: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn static_routes_resolve() {
        assert_eq!(AppRoute::parse("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::parse("/add-product"), Some(AppRoute::AddProduct));
        assert_eq!(AppRoute::parse("/favorites/"), Some(AppRoute::Favorites));
        assert_eq!(AppRoute::parse("/cart?x=1"), Some(AppRoute::Cart));
        assert_eq!(AppRoute::parse("/profile#top"), Some(AppRoute::Profile));
        assert_eq!(AppRoute::parse("/login"), Some(AppRoute::Login));
        assert_eq!(AppRoute::parse("/?q=shoes"), Some(AppRoute::Home));
    }

    #[test]
    fn unknown_routes_do_not_resolve() {
        assert_eq!(AppRoute::parse("/checkout"), None);
        assert_eq!(AppRoute::parse("/product/"), None);
        assert_eq!(AppRoute::parse("/product/1/reviews"), None);
    }

    #[test]
    fn product_detail_encodes_its_id() {
        let route = AppRoute::ProductDetail(id("a b/c"));
        assert_eq!(route.path(), "/product/a%20b%2Fc");
        assert_eq!(AppRoute::parse(&route.path()), Some(route));
    }

    #[test]
    fn detail_segment_survives_the_router() {
        // The router hands `:id` over exactly as it sits in the URL path.
        let route = AppRoute::ProductDetail(id("a b+c"));
        let url = url::Url::parse("http://localhost/")
            .unwrap()
            .join(&route.path())
            .unwrap();
        let segment = url.path_segments().unwrap().nth(1).unwrap().to_string();
        assert_eq!(segment, "a%20b+c");
        assert_eq!(decode_product_segment(&segment), Some(id("a b+c")));
    }

    #[test]
    fn blank_or_malformed_segments_are_rejected() {
        assert_eq!(decode_product_segment("%20%20"), None);
        assert_eq!(decode_product_segment("%FF"), None);
        assert_eq!(decode_product_segment("plain"), Some(id("plain")));
    }

    #[test]
    fn home_with_query_encodes_text() {
        assert_eq!(home_with_query("running shoes"), "/?q=running+shoes");
        assert_eq!(home_with_query("   "), "/");
        assert_eq!(home_with_query("a&b"), "/?q=a%26b");
    }

    #[test]
    fn blank_nav_search_resets_home_text() {
        assert_eq!(home_with_query(""), "/");
        let url = url::Url::parse("http://localhost/").unwrap().join(&home_with_query("")).unwrap();
        let q = url.query_pairs().find(|(k, _)| k == paths::SEARCH_PARAM).map(|(_, v)| v.into_owned());
        assert_eq!(search_text(q.as_deref()), "");
    }

    #[test]
    fn nav_search_text_reaches_home() {
        let url = url::Url::parse("http://localhost/")
            .unwrap()
            .join(&home_with_query("running shoes"))
            .unwrap();
        let q = url.query_pairs().find(|(k, _)| k == paths::SEARCH_PARAM).map(|(_, v)| v.into_owned());
        assert_eq!(search_text(q.as_deref()), "running shoes");
    }

    #[test]
    fn nav_items_cover_every_static_route() {
        let routes: Vec<String> = nav_items().iter().map(|i| i.route.path()).collect();
        assert_eq!(routes, vec!["/", "/add-product", "/favorites", "/cart", "/profile", "/login"]);
        assert_eq!(nav_items().iter().filter(|i| i.primary).count(), 1);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 300,
                ..ProptestConfig::default()
            })]

            /// Property: detail paths resolve back to the same product.
            #[test]
            fn detail_paths_resolve(raw in "[A-Za-z0-9 ._~/&?#%+-]{1,12}") {
                prop_assume!(!raw.trim().is_empty());
                let route = AppRoute::ProductDetail(id(&raw));
                prop_assert_eq!(AppRoute::parse(&route.path()), Some(route));
            }
        }
    }
}
