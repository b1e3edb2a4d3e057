//! Filter Predicate
//!
//! AND-combination of independent criteria; an inactive criterion matches
//! everything.

use std::collections::BTreeSet;

use super::Filterable;

/// User-configured filter parameters for one list screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub selected_category: Option<u32>,
    pub selected_values: BTreeSet<String>,
    /// Inclusive `(min, max)`
    pub numeric_range: Option<(f64, f64)>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search_text.trim().is_empty()
            && self.selected_category.is_none()
            && self.selected_values.is_empty()
            && self.numeric_range.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Add the value to the multi-select set, or remove it if present
    pub fn toggle_value(&mut self, value: &str) {
        if !self.selected_values.remove(value) {
            self.selected_values.insert(value.to_string());
        }
    }
}

/// Whether a single item passes every active criterion
pub fn matches<T: Filterable>(item: &T, criteria: &FilterCriteria) -> bool {
    matches_text(item, &criteria.search_text)
        && matches_category(item, criteria.selected_category)
        && matches_values(item, &criteria.selected_values)
        && matches_range(item, criteria.numeric_range)
}

/// Subset of `items` matching `criteria`, in input order
pub fn filter_items<T: Filterable + Clone>(items: &[T], criteria: &FilterCriteria) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches(*item, criteria))
        .cloned()
        .collect()
}

/// `(min, max)` over the items' numeric values, `None` if there are none
pub fn value_bounds<T: Filterable>(items: &[T]) -> Option<(f64, f64)> {
    items
        .iter()
        .filter_map(Filterable::numeric_value)
        .filter(|value| value.is_finite())
        .fold(None, |bounds, value| match bounds {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

// Lowercase comparison only, no full Unicode case folding
fn matches_text<T: Filterable>(item: &T, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_category<T: Filterable>(item: &T, selected: Option<u32>) -> bool {
    match selected {
        None => true,
        Some(category) => item.category_id() == Some(category),
    }
}

fn matches_values<T: Filterable>(item: &T, selected: &BTreeSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    item.discriminant()
        .map(|value| selected.contains(value))
        .unwrap_or(false)
}

// Items without a numeric value are never excluded by the range
fn matches_range<T: Filterable>(item: &T, range: Option<(f64, f64)>) -> bool {
    match (range, item.numeric_value()) {
        (Some((min, max)), Some(value)) => min <= value && value <= max,
        _ => true,
    }
}
