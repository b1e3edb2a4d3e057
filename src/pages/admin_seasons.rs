//! Admin Seasons Page
//!
//! Harvest season management. Seasons are date ranges that product batches
//! are tagged with.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, ListStatus, PaginationBar, SearchBox};
use crate::context::use_app;
use crate::fetch::BusyFlag;
use crate::listing::ListingSignals;
use crate::models::{Season, SeasonDraft};
use crate::store::{store_remove_season, store_upsert_season};
use crate::validation::validate_season;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Value of an `<input type="date">`; empty or malformed input is None
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

fn format_date_input(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

#[component]
pub fn AdminSeasonsPage() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store();
    let seasons = ListingSignals::<Season>::new(ctx.page_size());
    let busy = BusyFlag::new();

    let refresh = move || {
        let api = ctx.api();
        seasons.load(async move { api.list_seasons().await }, move |err| ctx.notify_error(&err));
    };
    Effect::new(move |_| refresh());

    let editing = RwSignal::new(None::<u32>);
    let name = RwSignal::new(String::new());
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let reset_form = move || {
        editing.set(None);
        name.set(String::new());
        start.set(String::new());
        end.set(String::new());
        description.set(String::new());
    };

    let start_edit = move |season: &Season| {
        let draft = SeasonDraft::from(season);
        editing.set(Some(season.id));
        name.set(draft.name);
        start.set(draft.start_date.map(format_date_input).unwrap_or_default());
        end.set(draft.end_date.map(format_date_input).unwrap_or_default());
        description.set(draft.description);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = SeasonDraft {
            name: name.get_untracked().trim().to_string(),
            start_date: parse_date_input(&start.get_untracked()),
            end_date: parse_date_input(&end.get_untracked()),
            description: description.get_untracked().trim().to_string(),
        };
        if let Err(err) = validate_season(&draft) {
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
                Some(id) => api.update_season(id, &draft).await,
                None => api.create_season(&draft).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("saved season {} ({})", saved.id, saved.name);
                    ctx.notify_success(format!("Saved {}", saved.name));
                    store_upsert_season(&store, saved);
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
            match api.delete_season(id).await {
                Ok(message) => {
                    log::info!("deleted season {}", id);
                    seasons.remove(id);
                    store_remove_season(&store, id);
                    ctx.notify_success(if message.is_empty() { "Season deleted".to_string() } else { message });
                }
                Err(err) => ctx.notify_error(&err),
            }
        });
    };

    view! {
        <section class="page admin admin-seasons">
            <header class="page-header">
                <h2>"Seasons"</h2>
            </header>

            <form class="admin-form" on:submit=submit>
                <h3>{move || if editing.get().is_some() { "Edit season" } else { "New season" }}</h3>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <label>
                    "Starts "
                    <input
                        type="date"
                        prop:value=move || start.get()
                        on:input=move |ev| start.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Ends "
                    <input
                        type="date"
                        prop:value=move || end.get()
                        on:input=move |ev| end.set(event_target_value(&ev))
                    />
                </label>
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
                    value=Signal::derive(move || seasons.criteria().search_text)
                    on_input={move |text: String| seasons.set_search(text)}
                    placeholder="Search seasons…"
                />
            </div>

            <ListStatus
                state=Signal::derive(move || seasons.load_state())
                empty=Signal::derive(move || seasons.filtered_len.get() == 0)
                empty_message="No seasons"
            />

            <table class="data-table">
                <thead>
                    <tr><th>"Name"</th><th>"Starts"</th><th>"Ends"</th><th></th></tr>
                </thead>
                <tbody>
                    {move || {
                        seasons.visible.get().into_iter().map(|season| {
                            let id = season.id;
                            let row = season.clone();
                            view! {
                                <tr>
                                    <td>{season.name.clone()}</td>
                                    <td>{season.start_date.format("%b %-d, %Y").to_string()}</td>
                                    <td>{season.end_date.format("%b %-d, %Y").to_string()}</td>
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

            <PaginationBar listing=seasons />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("2024-06-01"), NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(parse_date_input(" 2024-06-01 "), NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("06/01/2024"), None);
    }

    #[test]
    fn test_date_input_format_matches_parser() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
        assert_eq!(format_date_input(date), "2024-09-30");
        assert_eq!(parse_date_input(&format_date_input(date)), Some(date));
    }
}
