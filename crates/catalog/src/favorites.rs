//! Session-local favorites set.

use serde::{Deserialize, Serialize};

use marketplace_core::ProductId;

/// Product ids the user has hearted, in the order they were added.
///
/// Membership only drives display; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Favorites {
    ids: Vec<ProductId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Idempotent add. Returns `true` if the id was not already present.
    pub fn add(&mut self, id: ProductId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Idempotent remove. Returns `true` if the id was present.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    /// Flip membership and return the new state (`true` = now a favorite).
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.remove(&id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn add_and_remove_are_idempotent() {
        let mut favorites = Favorites::new();
        assert!(favorites.add(id("1")));
        assert!(!favorites.add(id("1")));
        assert_eq!(favorites.len(), 1);

        assert!(favorites.remove(&id("1")));
        assert!(!favorites.remove(&id("1")));
        assert!(favorites.is_empty());
    }

    #[test]
    fn toggle_reports_new_membership() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle(id("2")));
        assert!(favorites.contains(&id("2")));
        assert!(!favorites.toggle(id("2")));
        assert!(!favorites.contains(&id("2")));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut favorites = Favorites::new();
        favorites.add(id("3"));
        favorites.add(id("1"));
        favorites.add(id("2"));
        let order: Vec<&str> = favorites.iter().map(|i| i.as_str()).collect();
        assert_eq!(order, vec!["3", "1", "2"]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: toggling the same id twice restores the original membership.
            #[test]
            fn double_toggle_restores_membership(
                existing in proptest::collection::vec("[1-9]", 0..6),
                target in "[1-9]"
            ) {
                let mut favorites = Favorites::new();
                for s in &existing {
                    favorites.add(id(s));
                }
                let before = favorites.clone();

                favorites.toggle(id(&target));
                favorites.toggle(id(&target));

                let mut a: Vec<ProductId> = before.iter().cloned().collect();
                let mut b: Vec<ProductId> = favorites.iter().cloned().collect();
                a.sort();
                b.sort();
                prop_assert_eq!(a, b);
            }

            /// Property: the set never holds duplicates.
            #[test]
            fn never_holds_duplicates(ops in proptest::collection::vec("[1-4]", 0..20)) {
                let mut favorites = Favorites::new();
                for s in &ops {
                    favorites.toggle(id(s));
                }
                let mut seen: Vec<&ProductId> = favorites.iter().collect();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), favorites.len());
            }
        }
    }
}
