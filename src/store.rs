//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, Season};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification shown in the corner of the screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Reference data shared by catalog filters and admin forms
    pub categories: Vec<Category>,
    pub seasons: Vec<Season>,
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Queue a toast; returns its id for later dismissal
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: String) -> u32 {
    let id = store.next_toast_id().get_untracked() + 1;
    store.next_toast_id().set(id);
    store.toasts().update(|toasts| toasts.push(Toast { id, kind, message }));
    id
}

pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().update(|toasts| toasts.retain(|toast| toast.id != toast_id));
}

/// Replace a category in the cached list by ID, or append it
pub fn store_upsert_category(store: &AppStore, category: Category) {
    let field = store.categories();
    let mut categories = field.write();
    let position = categories.iter().position(|existing| existing.id == category.id);
    match position {
        Some(index) => categories[index] = category,
        None => categories.push(category),
    }
}

pub fn store_remove_category(store: &AppStore, category_id: u32) {
    store.categories().update(|categories| categories.retain(|category| category.id != category_id));
}

pub fn store_upsert_season(store: &AppStore, season: Season) {
    let field = store.seasons();
    let mut seasons = field.write();
    let position = seasons.iter().position(|existing| existing.id == season.id);
    match position {
        Some(index) => seasons[index] = season,
        None => seasons.push(season),
    }
}

pub fn store_remove_season(store: &AppStore, season_id: u32) {
    store.seasons().update(|seasons| seasons.retain(|season| season.id != season_id));
}

/// Category name by ID, for table cells
pub fn category_name(categories: &[Category], category_id: Option<u32>) -> String {
    category_id
        .and_then(|id| categories.iter().find(|category| category.id == id))
        .map(|category| category.name.clone())
        .unwrap_or_else(|| "Uncategorised".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn category(id: u32, name: &str) -> Category {
        Category { id, name: name.to_string(), description: String::new() }
    }

    #[test]
    fn test_toasts_get_increasing_ids() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());

        let first = store_push_toast(&store, ToastKind::Error, "DB unavailable".into());
        let second = store_push_toast(&store, ToastKind::Success, "Saved".into());
        assert!(second > first);
        assert_eq!(store.toasts().get_untracked().len(), 2);

        store_dismiss_toast(&store, first);
        let remaining = store.toasts().get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "Saved");
    }

    #[test]
    fn test_upsert_category_replaces_or_appends() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());

        store_upsert_category(&store, category(1, "Vegetables"));
        store_upsert_category(&store, category(2, "Dairy"));
        store_upsert_category(&store, category(1, "Greens"));
        let names: Vec<String> = store.categories().get_untracked().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Greens".to_string(), "Dairy".to_string()]);

        store_remove_category(&store, 2);
        assert_eq!(store.categories().get_untracked().len(), 1);
    }

    #[test]
    fn test_upsert_season_replaces_in_place() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());
        let season = |id: u32, name: &str| Season {
            id,
            name: name.to_string(),
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
            description: String::new(),
        };

        store_upsert_season(&store, season(1, "Spring"));
        store_upsert_season(&store, season(2, "Summer"));
        store_upsert_season(&store, season(1, "Early Spring"));
        let seasons = store.seasons().get_untracked();
        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].name, "Early Spring");

        store_remove_season(&store, 1);
        assert_eq!(store.seasons().get_untracked()[0].name, "Summer");
    }

    #[test]
    fn test_category_name_lookup() {
        let categories = vec![category(1, "Vegetables")];
        assert_eq!(category_name(&categories, Some(1)), "Vegetables");
        assert_eq!(category_name(&categories, Some(9)), "Uncategorised");
        assert_eq!(category_name(&categories, None), "Uncategorised");
    }
}
