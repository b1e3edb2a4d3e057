//! Catalog Page
//!
//! Customer-facing product list: text search, category, price range and farm
//! filters over the full product collection.

use leptos::prelude::*;

use crate::components::{ListStatus, MultiSelectChips, OptionSelect, PaginationBar, RangeFilter, SearchBox};
use crate::context::{use_app, Screen};
use crate::listing::ListingSignals;
use crate::markdown::summary;
use crate::models::Product;
use crate::store::{category_name, AppStateStoreFields};

const SUMMARY_CHARS: usize = 120;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store();
    let products = ListingSignals::<Product>::new(ctx.page_size());

    let refresh = move || {
        let api = ctx.api();
        products.load(async move { api.list_products().await }, move |err| ctx.notify_error(&err));
    };

    // Load on mount
    Effect::new(move |_| refresh());

    let category_options = Signal::derive(move || {
        store
            .categories()
            .get()
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect::<Vec<_>>()
    });
    let farm_options = Signal::derive(move || {
        products
            .distinct_values()
            .into_iter()
            .map(|farm| (farm.clone(), farm))
            .collect::<Vec<_>>()
    });

    view! {
        <section class="page catalog">
            <header class="page-header">
                <h2>"Catalog"</h2>
                <button class="refresh-btn" disabled=move || products.is_loading() on:click=move |_| refresh()>
                    "Refresh"
                </button>
            </header>

            <div class="filter-bar">
                <SearchBox
                    value=Signal::derive(move || products.criteria().search_text)
                    on_input={move |text: String| products.set_search(text)}
                    placeholder="Search products…"
                />
                <OptionSelect
                    options=category_options
                    selected=Signal::derive(move || products.criteria().selected_category)
                    on_change={move |category: Option<u32>| products.set_category(category)}
                    none_label="All categories"
                />
                <RangeFilter
                    label="Price"
                    bounds=Signal::derive(move || products.bounds())
                    range=Signal::derive(move || products.criteria().numeric_range)
                    on_change={move |range: Option<(f64, f64)>| products.set_range(range)}
                />
                <MultiSelectChips
                    options=farm_options
                    selected=Signal::derive(move || products.criteria().selected_values)
                    on_toggle={move |farm: String| products.toggle_value(&farm)}
                />
                <button class="clear-btn" on:click=move |_| products.clear_filters()>"Clear filters"</button>
            </div>

            <ListStatus
                state=Signal::derive(move || products.load_state())
                empty=Signal::derive(move || products.filtered_len.get() == 0)
                empty_message="No products match your filters"
            />

            <div class="product-grid">
                <For
                    each=move || products.visible.get()
                    key=|product| product.id
                    children=move |product| {
                        let id = product.id;
                        let category_id = product.category_id;
                        let category = move || store.categories().with(|all| category_name(all, category_id));
                        view! {
                            <article class="product-card" on:click=move |_| ctx.navigate(Screen::Product(id))>
                                <h3>{product.name.clone()}</h3>
                                {product.is_organic.then(|| view! { <span class="badge organic">"Organic"</span> })}
                                <p class="product-meta">{category} " · " {product.farm_name.clone()}</p>
                                <p class="product-summary">{summary(&product.description, SUMMARY_CHARS)}</p>
                                <p class="product-price">{format!("${:.2} / {}", product.price, product.unit)}</p>
                            </article>
                        }
                    }
                />
            </div>

            <PaginationBar listing=products />
        </section>
    }
}
