//! Farms Page
//!
//! Farm discovery: search by name or description, narrow by region.

use leptos::prelude::*;

use crate::components::{ListStatus, MultiSelectChips, PaginationBar, SearchBox};
use crate::context::use_app;
use crate::listing::ListingSignals;
use crate::markdown::summary;
use crate::models::Farm;

#[component]
pub fn FarmsPage() -> impl IntoView {
    let ctx = use_app();
    let farms = ListingSignals::<Farm>::new(ctx.page_size());

    Effect::new(move |_| {
        let api = ctx.api();
        farms.load(async move { api.list_farms(None).await }, move |err| ctx.notify_error(&err));
    });

    let region_options = Signal::derive(move || {
        farms
            .distinct_values()
            .into_iter()
            .map(|region| (region.clone(), region))
            .collect::<Vec<_>>()
    });

    view! {
        <section class="page farms">
            <header class="page-header">
                <h2>"Farms"</h2>
            </header>

            <div class="filter-bar">
                <SearchBox
                    value=Signal::derive(move || farms.criteria().search_text)
                    on_input={move |text: String| farms.set_search(text)}
                    placeholder="Search farms…"
                />
                <MultiSelectChips
                    options=region_options
                    selected=Signal::derive(move || farms.criteria().selected_values)
                    on_toggle={move |region: String| farms.toggle_value(&region)}
                />
            </div>

            <ListStatus
                state=Signal::derive(move || farms.load_state())
                empty=Signal::derive(move || farms.filtered_len.get() == 0)
                empty_message="No farms found"
            />

            <div class="farm-grid">
                <For
                    each=move || farms.visible.get()
                    key=|farm| farm.id
                    children=move |farm| {
                        view! {
                            <article class="farm-card">
                                <h3>{farm.name.clone()}</h3>
                                <p class="farm-region">{farm.region.clone()}</p>
                                <p class="farm-summary">{summary(&farm.description, 160)}</p>
                                <p class="farm-meta">{format!("{} · {} products", farm.address, farm.product_count)}</p>
                            </article>
                        }
                    }
                />
            </div>

            <PaginationBar listing=farms />
        </section>
    }
}
