//! Admin Products Page
//!
//! Farmer/admin product management: searchable table, create/edit form and
//! inline delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, ListStatus, OptionSelect, PaginationBar, SearchBox};
use crate::context::use_app;
use crate::fetch::BusyFlag;
use crate::listing::ListingSignals;
use crate::models::{Product, ProductDraft};
use crate::store::{category_name, AppStateStoreFields};
use crate::validation::validate_product;

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store();
    let products = ListingSignals::<Product>::new(ctx.page_size());
    let busy = BusyFlag::new();

    let refresh = move || {
        let api = ctx.api();
        products.load(async move { api.list_products().await }, move |err| ctx.notify_error(&err));
    };
    Effect::new(move |_| refresh());
    // Category select should reflect edits made on other screens
    ctx.reload_reference_data();

    // Form state; `editing` is None while creating
    let editing = RwSignal::new(None::<u32>);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(None::<u32>);
    let price = RwSignal::new(String::new());
    let unit = RwSignal::new(String::from("kg"));
    let stock = RwSignal::new(String::from("0"));
    let organic = RwSignal::new(false);

    let reset_form = move || {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
        category.set(None);
        price.set(String::new());
        unit.set(String::from("kg"));
        stock.set(String::from("0"));
        organic.set(false);
    };

    let start_edit = move |product: &Product| {
        let draft = ProductDraft::from(product);
        editing.set(Some(product.id));
        name.set(draft.name);
        description.set(draft.description);
        category.set(draft.category_id);
        price.set(format!("{:.2}", draft.price));
        unit.set(draft.unit);
        stock.set(draft.stock.to_string());
        organic.set(draft.is_organic);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ProductDraft {
            name: name.get_untracked().trim().to_string(),
            description: description.get_untracked(),
            category_id: category.get_untracked(),
            price: price.get_untracked().trim().parse().unwrap_or(f64::NAN),
            unit: unit.get_untracked().trim().to_string(),
            stock: stock.get_untracked().trim().parse().unwrap_or(0),
            is_organic: organic.get_untracked(),
        };
        if let Err(err) = validate_product(&draft) {
            ctx.notify_error(&err);
            return;
        }
        let Some(guard) = busy.try_acquire() else {
            return;
        };
        let api = ctx.api();
        let target = editing.get_untracked();
        spawn_local(async move {
            let _guard = guard;
            let result = match target {
                Some(id) => api.update_product(id, &draft).await,
                None => api.create_product(&draft).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("saved product {} ({})", saved.id, saved.name);
                    ctx.notify_success(format!("Saved {}", saved.name));
                    reset_form();
                    refresh();
                }
                Err(err) => ctx.notify_error(&err),
            }
        });
    };

    let delete = move |id: u32| {
        let Some(guard) = busy.try_acquire() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let _guard = guard;
            match api.delete_product(id).await {
                Ok(message) => {
                    log::info!("deleted product {}", id);
                    products.remove(id);
                    ctx.notify_success(if message.is_empty() { "Product deleted".to_string() } else { message });
                }
                Err(err) => ctx.notify_error(&err),
            }
        });
    };

    let category_options = Signal::derive(move || {
        store
            .categories()
            .get()
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect::<Vec<_>>()
    });

    view! {
        <section class="page admin admin-products">
            <header class="page-header">
                <h2>"Products"</h2>
            </header>

            <form class="admin-form" on:submit=submit>
                <h3>{move || if editing.get().is_some() { "Edit product" } else { "New product" }}</h3>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description (Markdown)"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <OptionSelect
                    options=category_options
                    selected=Signal::derive(move || category.get())
                    on_change={move |id: Option<u32>| category.set(id)}
                    none_label="Select category…"
                />
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="Price"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Unit"
                    prop:value=move || unit.get()
                    on:input=move |ev| unit.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Stock"
                    prop:value=move || stock.get()
                    on:input=move |ev| stock.set(event_target_value(&ev))
                />
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || organic.get()
                        on:change=move |ev| organic.set(event_target_checked(&ev))
                    />
                    "Organic"
                </label>
                <button type="submit" disabled=move || busy.is_busy()>
                    {move || if busy.is_busy() { "Saving…" } else { "Save" }}
                </button>
                <Show when=move || editing.get().is_some()>
                    <button type="button" on:click=move |_| reset_form()>"Cancel"</button>
                </Show>
            </form>

            <div class="filter-bar">
                <SearchBox
                    value=Signal::derive(move || products.criteria().search_text)
                    on_input={move |text: String| products.set_search(text)}
                    placeholder="Search products…"
                />
                <OptionSelect
                    options=category_options
                    selected=Signal::derive(move || products.criteria().selected_category)
                    on_change={move |id: Option<u32>| products.set_category(id)}
                    none_label="All categories"
                />
            </div>

            <ListStatus
                state=Signal::derive(move || products.load_state())
                empty=Signal::derive(move || products.filtered_len.get() == 0)
                empty_message="No products"
            />

            <table class="data-table">
                <thead>
                    <tr><th>"Name"</th><th>"Category"</th><th>"Price"</th><th>"Stock"</th><th></th></tr>
                </thead>
                <tbody>
                    {move || {
                        let categories = store.categories().get();
                        products.visible.get().into_iter().map(|product| {
                            let id = product.id;
                            let category = category_name(&categories, product.category_id);
                            let row = product.clone();
                            view! {
                                <tr>
                                    <td>{product.name.clone()}</td>
                                    <td>{category}</td>
                                    <td>{format!("${:.2} / {}", product.price, product.unit)}</td>
                                    <td>{product.stock}</td>
                                    <td class="row-actions">
                                        <button class="edit-btn" on:click=move |_| start_edit(&row)>"Edit"</button>
                                        <DeleteConfirmButton
                                            disabled=Signal::derive(move || busy.is_busy())
                                            on_confirm={move |_: ()| delete(id)}
                                        />
                                    </td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>

            <PaginationBar listing=products />
        </section>
    }
}
