//! Product Page
//!
//! One product with its harvest batches. Product and batches load as two
//! independent requests, each into its own slot.

use leptos::prelude::*;

use crate::components::{ListStatus, MultiSelectChips, OptionSelect, PaginationBar, SearchBox};
use crate::context::{use_app, Screen};
use crate::fetch::FetchSlot;
use crate::listing::ListingSignals;
use crate::markdown::render_description;
use crate::models::{Product, ProductBatch};
use crate::store::AppStateStoreFields;

#[component]
pub fn ProductDetailPage(product_id: u32) -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store();
    let product = FetchSlot::<Product>::new();
    let batches = ListingSignals::<ProductBatch>::new(ctx.page_size());

    Effect::new(move |_| {
        let api = ctx.api();
        product.load(async move { api.get_product(product_id).await }, move |err| ctx.notify_error(&err));
        let api = ctx.api();
        batches.load(
            async move { api.list_product_batches(product_id).await },
            move |err| ctx.notify_error(&err),
        );
    });

    let season_options = Signal::derive(move || {
        store
            .seasons()
            .get()
            .into_iter()
            .map(|season| (season.id, season.name))
            .collect::<Vec<_>>()
    });
    let grade_options = Signal::derive(move || {
        batches
            .distinct_values()
            .into_iter()
            .map(|grade| (grade.clone(), format!("Grade {}", grade)))
            .collect::<Vec<_>>()
    });
    let season_name = move |season_id: Option<u32>| {
        store.seasons().with(|seasons| {
            season_id
                .and_then(|id| seasons.iter().find(|season| season.id == id))
                .map(|season| season.name.clone())
                .unwrap_or_else(|| "—".to_string())
        })
    };

    view! {
        <section class="page product-detail">
            <button class="back-btn" on:click=move |_| ctx.navigate(Screen::Catalog)>"‹ Back to catalog"</button>

            {move || match product.value.get() {
                Some(p) => view! {
                    <div class="product-header">
                        <h2>{p.name.clone()}</h2>
                        <p class="product-price">{format!("${:.2} / {}", p.price, p.unit)}</p>
                        <p class="product-meta">{format!("{} · {} in stock", p.farm_name, p.stock)}</p>
                        <div class="product-description" inner_html=render_description(&p.description)></div>
                    </div>
                }.into_any(),
                None => view! {
                    <ListStatus
                        state=product.state
                        empty=Signal::derive(|| false)
                        empty_message=""
                    />
                }.into_any(),
            }}

            <h3>"Harvest batches"</h3>
            <div class="filter-bar">
                <SearchBox
                    value=Signal::derive(move || batches.criteria().search_text)
                    on_input={move |text: String| batches.set_search(text)}
                    placeholder="Batch code or grade…"
                />
                <OptionSelect
                    options=season_options
                    selected=Signal::derive(move || batches.criteria().selected_category)
                    on_change={move |season: Option<u32>| batches.set_category(season)}
                    none_label="All seasons"
                />
                <MultiSelectChips
                    options=grade_options
                    selected=Signal::derive(move || batches.criteria().selected_values)
                    on_toggle={move |grade: String| batches.toggle_value(&grade)}
                />
            </div>

            <ListStatus
                state=Signal::derive(move || batches.load_state())
                empty=Signal::derive(move || batches.filtered_len.get() == 0)
                empty_message="No batches recorded"
            />

            <table class="data-table">
                <thead>
                    <tr><th>"Batch"</th><th>"Season"</th><th>"Harvested"</th><th>"Quantity"</th><th>"Grade"</th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || batches.visible.get()
                        key=|batch| batch.id
                        children=move |batch| {
                            let season_id = batch.season_id;
                            view! {
                                <tr>
                                    <td>{batch.batch_code.clone()}</td>
                                    <td>{move || season_name(season_id)}</td>
                                    <td>{batch.harvest_date.format("%Y-%m-%d").to_string()}</td>
                                    <td>{format!("{:.1}", batch.quantity)}</td>
                                    <td>{batch.quality_grade.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <PaginationBar listing=batches />
        </section>
    }
}
