//! Reactive List State
//!
//! Wraps a `ListController` in signals so views recompute the filtered set
//! and the visible page when criteria or data change.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::controller::ListController;
use super::filter::FilterCriteria;
use super::paginate::PageState;
use super::Filterable;
use crate::error::AppError;
use crate::fetch::{ticket_is_current, LoadState, RequestGeneration};

pub struct ListingSignals<T: Send + Sync + 'static> {
    pub controller: RwSignal<ListController<T>>,
    /// Current page slice
    pub visible: Memo<Vec<T>>,
    pub filtered_len: Memo<usize>,
    pub total_pages: Memo<usize>,
    generation: StoredValue<RequestGeneration>,
}

impl<T: Send + Sync + 'static> Clone for ListingSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListingSignals<T> {}

impl<T> ListingSignals<T>
where
    T: Filterable + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(items_per_page: usize) -> Self {
        let controller = RwSignal::new(ListController::new(items_per_page));
        let filtered = Memo::new(move |_| controller.with(|c| c.filtered()));
        let page = Memo::new(move |_| controller.with(|c| *c.page()));
        let visible = Memo::new(move |_| {
            let page = page.get();
            filtered.with(|items| super::paginate(items, &page))
        });
        let filtered_len = Memo::new(move |_| filtered.with(Vec::len));
        let total_pages = Memo::new(move |_| {
            super::total_pages(filtered_len.get(), page.get().items_per_page())
        });
        Self {
            controller,
            visible,
            filtered_len,
            total_pages,
            generation: RequestGeneration::scoped(),
        }
    }

    /// Fetch the collection. Responses that arrive after a newer load or
    /// after the screen is gone are dropped.
    pub fn load<Fut>(self, request: Fut, on_error: impl FnOnce(AppError) + 'static)
    where
        Fut: Future<Output = Result<Vec<T>, AppError>> + 'static,
    {
        let Some(ticket) = self.generation.try_with_value(|generation| generation.issue()) else {
            return;
        };
        self.controller.update(|c| c.begin_load());
        spawn_local(async move {
            let result = request.await;
            if !ticket_is_current(self.generation, ticket) {
                log::debug!("discarding stale list response (ticket {})", ticket);
                return;
            }
            if let Some(count) = result.as_ref().ok().map(Vec::len) {
                log::debug!("list loaded: {} records", count);
            }
            if let Some(err) = self.controller.try_update(|c| c.apply_fetch(result)).flatten() {
                log::warn!("list fetch failed: {}", err);
                on_error(err);
            }
        });
    }

    pub fn load_state(&self) -> LoadState {
        self.controller.with(|c| c.load_state().clone())
    }

    pub fn is_loading(&self) -> bool {
        self.controller.with(|c| c.load_state().is_loading())
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.controller.with(|c| c.criteria().clone())
    }

    pub fn page(&self) -> PageState {
        self.controller.with(|c| *c.page())
    }

    pub fn set_search(&self, text: String) {
        self.controller.update(|c| c.set_search(text));
    }

    pub fn set_category(&self, category: Option<u32>) {
        self.controller.update(|c| c.set_category(category));
    }

    pub fn toggle_value(&self, value: &str) {
        self.controller.update(|c| c.toggle_value(value));
    }

    pub fn set_range(&self, range: Option<(f64, f64)>) {
        self.controller.update(|c| c.set_range(range));
    }

    pub fn clear_filters(&self) {
        self.controller.update(|c| c.clear_filters());
    }

    pub fn set_items_per_page(&self, items_per_page: usize) {
        self.controller.update(|c| c.set_items_per_page(items_per_page));
    }

    pub fn go_to_page(&self, page: usize) {
        self.controller.update(|c| c.go_to_page(page));
    }

    pub fn next_page(&self) {
        self.controller.update(|c| c.next_page());
    }

    pub fn previous_page(&self) {
        self.controller.update(|c| c.previous_page());
    }

    pub fn remove(&self, id: u32) {
        self.controller.update(|c| {
            c.remove(id);
        });
    }

    pub fn replace(&self, updated: T) {
        self.controller.update(|c| {
            c.replace(updated);
        });
    }

    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.controller.with(|c| c.bounds())
    }

    pub fn distinct_values(&self) -> Vec<String> {
        self.controller.with(|c| c.distinct_values())
    }
}
