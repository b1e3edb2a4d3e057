//! Collection State Holder
//!
//! Owns the full fetched collection together with the screen's criteria and
//! page state. Every criterion change lands back on page 1.

use super::filter::{filter_items, value_bounds, FilterCriteria};
use super::paginate::{paginate, total_pages, PageState};
use super::Filterable;
use crate::error::AppError;
use crate::fetch::LoadState;

#[derive(Debug, Clone, PartialEq)]
pub struct ListController<T> {
    items: Vec<T>,
    criteria: FilterCriteria,
    page: PageState,
    load_state: LoadState,
}

impl<T: Filterable + Clone> ListController<T> {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            items: Vec::new(),
            criteria: FilterCriteria::default(),
            page: PageState::new(items_per_page),
            load_state: LoadState::Idle,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    // ========================
    // Fetch lifecycle
    // ========================

    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Apply a fetch result. Success replaces the collection wholesale;
    /// failure keeps whatever was there and hands the error back.
    pub fn apply_fetch(&mut self, result: Result<Vec<T>, AppError>) -> Option<AppError> {
        match result {
            Ok(items) => {
                self.items = items;
                self.load_state = LoadState::Success;
                if self.page.current_page() > self.total_pages() {
                    self.page.reset();
                }
                None
            }
            Err(err) => {
                self.load_state = LoadState::Failed(err.user_message());
                Some(err)
            }
        }
    }

    /// Drop a record after a successful delete
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.page.reset();
        self.items.len() != before
    }

    /// Swap in the server's copy of a record after an update
    pub fn replace(&mut self, updated: T) -> bool {
        let position = self.items.iter().position(|item| item.id() == updated.id());
        match position {
            Some(index) => {
                self.items[index] = updated;
                true
            }
            None => false,
        }
    }

    // ========================
    // Criteria
    // ========================

    pub fn set_search(&mut self, text: String) {
        self.criteria.search_text = text;
        self.page.reset();
    }

    pub fn set_category(&mut self, category: Option<u32>) {
        self.criteria.selected_category = category;
        self.page.reset();
    }

    pub fn toggle_value(&mut self, value: &str) {
        self.criteria.toggle_value(value);
        self.page.reset();
    }

    pub fn set_range(&mut self, range: Option<(f64, f64)>) {
        self.criteria.numeric_range = range;
        self.page.reset();
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.page.reset();
    }

    // ========================
    // Paging
    // ========================

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.page.set_items_per_page(items_per_page);
    }

    pub fn go_to_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.page.go_to(page, total);
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.page.next(total);
    }

    pub fn previous_page(&mut self) {
        let total = self.total_pages();
        self.page.previous(total);
    }

    // ========================
    // Derived views
    // ========================

    pub fn filtered(&self) -> Vec<T> {
        filter_items(&self.items, &self.criteria)
    }

    pub fn visible(&self) -> Vec<T> {
        paginate(&self.filtered(), &self.page)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page.items_per_page())
    }

    /// Numeric bounds over the whole collection, for range inputs
    pub fn bounds(&self) -> Option<(f64, f64)> {
        value_bounds(&self.items)
    }

    /// Distinct multi-select values present in the collection, sorted
    pub fn distinct_values(&self) -> Vec<String> {
        let mut values: Vec<String> = self
            .items
            .iter()
            .filter_map(|item| item.discriminant())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();
        values.sort();
        values.dedup();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: String,
        grade: String,
    }

    impl Filterable for Row {
        fn id(&self) -> u32 {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str()]
        }

        fn discriminant(&self) -> Option<&str> {
            Some(&self.grade)
        }
    }

    fn rows(n: u32) -> Vec<Row> {
        (1..=n)
            .map(|id| Row {
                id,
                name: format!("Row {}", id),
                grade: if id % 2 == 0 { "A".into() } else { "B".into() },
            })
            .collect()
    }

    fn loaded(n: u32, per_page: usize) -> ListController<Row> {
        let mut controller = ListController::new(per_page);
        controller.begin_load();
        assert!(controller.apply_fetch(Ok(rows(n))).is_none());
        controller
    }

    #[test]
    fn test_fetch_success_replaces_collection() {
        let mut controller = loaded(5, 20);
        assert_eq!(controller.load_state(), &LoadState::Success);
        controller.apply_fetch(Ok(rows(2)));
        assert_eq!(controller.items().len(), 2);
    }

    #[test]
    fn test_fetch_failure_keeps_previous_collection() {
        let mut empty: ListController<Row> = ListController::new(20);
        let err = empty.apply_fetch(Err(AppError::Business("DB unavailable".into())));
        assert_eq!(err, Some(AppError::Business("DB unavailable".into())));
        assert!(empty.items().is_empty());
        assert_eq!(empty.load_state().error_message(), Some("DB unavailable"));

        let mut controller = loaded(3, 20);
        controller.apply_fetch(Err(AppError::Business("DB unavailable".into())));
        assert_eq!(controller.items(), rows(3).as_slice());
    }

    #[test]
    fn test_delete_removes_item_and_resets_page() {
        let mut controller = loaded(45, 20);
        controller.go_to_page(3);
        assert_eq!(controller.page().current_page(), 3);

        assert!(controller.remove(42));
        assert!(controller.items().iter().all(|row| row.id != 42));
        assert_eq!(controller.page().current_page(), 1);
        assert!(!controller.remove(42));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut controller = loaded(3, 20);
        let updated = Row { id: 2, name: "Renamed".into(), grade: "C".into() };
        assert!(controller.replace(updated.clone()));
        assert_eq!(controller.items()[1], updated);

        let missing = Row { id: 9, name: "Ghost".into(), grade: "A".into() };
        assert!(!controller.replace(missing));
        assert_eq!(controller.items().len(), 3);
    }

    #[test]
    fn test_criteria_changes_reset_page() {
        let mut controller = loaded(45, 20);
        controller.go_to_page(2);
        controller.set_search("Row".into());
        assert_eq!(controller.page().current_page(), 1);

        controller.go_to_page(2);
        controller.toggle_value("A");
        assert_eq!(controller.page().current_page(), 1);

        controller.go_to_page(2);
        controller.set_items_per_page(10);
        assert_eq!(controller.page().current_page(), 1);
    }

    #[test]
    fn test_visible_slice_follows_filter_and_page() {
        let mut controller = loaded(45, 20);
        controller.go_to_page(3);
        assert_eq!(controller.visible().len(), 5);

        controller.toggle_value("A");
        assert_eq!(controller.filtered().len(), 22);
        assert_eq!(controller.total_pages(), 2);
        assert_eq!(controller.visible().len(), 20);
    }

    #[test]
    fn test_refresh_that_shrinks_collection_returns_to_first_page() {
        let mut controller = loaded(45, 20);
        controller.go_to_page(3);
        controller.apply_fetch(Ok(rows(10)));
        assert_eq!(controller.page().current_page(), 1);
    }

    #[test]
    fn test_distinct_values_sorted() {
        let controller = loaded(5, 20);
        assert_eq!(controller.distinct_values(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_clear_filters() {
        let mut controller = loaded(10, 20);
        controller.set_search("Row 1".into());
        controller.clear_filters();
        assert_eq!(controller.criteria(), &FilterCriteria::default());
        assert_eq!(controller.filtered().len(), 10);
    }
}
