//! Pagination Bar Component
//!
//! Prev/next controls, page indicator and items-per-page selector for a
//! `ListingSignals` list. Hidden entirely when the filtered list is empty.

use leptos::prelude::*;

use crate::config::PAGE_SIZE_OPTIONS;
use crate::listing::{page_range_label, Filterable, ListingSignals};

#[component]
pub fn PaginationBar<T>(listing: ListingSignals<T>) -> impl IntoView
where
    T: Filterable + Clone + PartialEq + Send + Sync + 'static,
{
    let total = listing.total_pages;
    let page = move || listing.page();

    view! {
        <Show when=move || { total.get() > 0 }>
            <div class="pagination-bar">
                <button
                    class="page-btn"
                    disabled=move || !page().has_previous()
                    on:click=move |_| listing.previous_page()
                >
                    "‹ Prev"
                </button>
                <span class="page-indicator">
                    "Page "
                    <input
                        type="number"
                        class="page-jump"
                        min="1"
                        max=move || total.get().to_string()
                        prop:value=move || page().current_page().to_string()
                        on:change=move |ev| {
                            // Out-of-range input is clamped by the controller
                            if let Ok(target) = event_target_value(&ev).trim().parse::<usize>() {
                                listing.go_to_page(target);
                            }
                        }
                    />
                    {move || format!(" of {}", total.get())}
                </span>
                <button
                    class="page-btn"
                    disabled=move || !page().has_next(total.get())
                    on:click=move |_| listing.next_page()
                >
                    "Next ›"
                </button>
                <span class="page-range">
                    {move || page_range_label(listing.filtered_len.get(), &page())}
                </span>
                <select
                    class="page-size"
                    prop:value=move || page().items_per_page().to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            listing.set_items_per_page(size);
                        }
                    }
                >
                    {PAGE_SIZE_OPTIONS.iter().map(|size| {
                        let size = *size;
                        view! {
                            <option value=size.to_string() selected=move || page().items_per_page() == size>
                                {format!("{} / page", size)}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </Show>
    }
}
