//! Admin Categories Page
//!
//! Category table with a create/edit form. Saved categories are written
//! back into the global store so catalog filters pick them up.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, ListStatus, PaginationBar, SearchBox};
use crate::context::use_app;
use crate::fetch::BusyFlag;
use crate::listing::ListingSignals;
use crate::models::{Category, CategoryDraft};
use crate::store::{store_remove_category, store_upsert_category};
use crate::validation::validate_category;

#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store();
    let categories = ListingSignals::<Category>::new(ctx.page_size());
    let busy = BusyFlag::new();

    let refresh = move || {
        let api = ctx.api();
        categories.load(async move { api.list_categories().await }, move |err| ctx.notify_error(&err));
    };
    Effect::new(move |_| refresh());

    let editing = RwSignal::new(None::<u32>);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let reset_form = move || {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
    };

    let start_edit = move |category: &Category| {
        let draft = CategoryDraft::from(category);
        editing.set(Some(category.id));
        name.set(draft.name);
        description.set(draft.description);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = CategoryDraft {
            name: name.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
        };
        if let Err(err) = validate_category(&draft) {
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
                Some(id) => api.update_category(id, &draft).await,
                None => api.create_category(&draft).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("saved category {} ({})", saved.id, saved.name);
                    ctx.notify_success(format!("Saved {}", saved.name));
                    store_upsert_category(&store, saved);
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
            match api.delete_category(id).await {
                Ok(message) => {
                    log::info!("deleted category {}", id);
                    categories.remove(id);
                    store_remove_category(&store, id);
                    ctx.notify_success(if message.is_empty() { "Category deleted".to_string() } else { message });
                }
                Err(err) => ctx.notify_error(&err),
            }
        });
    };

    view! {
        <section class="page admin admin-categories">
            <header class="page-header">
                <h2>"Categories"</h2>
            </header>

            <form class="admin-form" on:submit=submit>
                <h3>{move || if editing.get().is_some() { "Edit category" } else { "New category" }}</h3>
                <input
                    type="text"
                    placeholder="Name"
                    maxlength="60"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || busy.is_busy()>
                    {move || if busy.is_busy() { "Saving…" } else { "Save" }}
                </button>
                <Show when=move || editing.get().is_some()>
                    <button type="button" on:click=move |_| reset_form()>"Cancel"</button>
                </Show>
            </form>

            <div class="filter-bar">
                <SearchBox
                    value=Signal::derive(move || categories.criteria().search_text)
                    on_input={move |text: String| categories.set_search(text)}
                    placeholder="Search categories…"
                />
            </div>

            <ListStatus
                state=Signal::derive(move || categories.load_state())
                empty=Signal::derive(move || categories.filtered_len.get() == 0)
                empty_message="No categories"
            />

            <table class="data-table">
                <thead>
                    <tr><th>"Name"</th><th>"Description"</th><th></th></tr>
                </thead>
                <tbody>
                    {move || {
                        categories.visible.get().into_iter().map(|category| {
                            let id = category.id;
                            let row = category.clone();
                            view! {
                                <tr>
                                    <td>{category.name.clone()}</td>
                                    <td class="muted">{category.description.clone()}</td>
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

            <PaginationBar listing=categories />
        </section>
    }
}
