//! Multi-Select Chips Component
//!
//! Toggle chips for the multi-select filter (farms, regions, statuses).

use std::collections::BTreeSet;

use leptos::prelude::*;

/// Chip row; `options` are `(value, label)` pairs
#[component]
pub fn MultiSelectChips(
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] selected: Signal<BTreeSet<String>>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="chip-row">
            <For
                each=move || options.get()
                key=|(value, _)| value.clone()
                children=move |(value, label)| {
                    let chip_value = value.clone();
                    let is_selected = move || selected.with(|set| set.contains(&value));
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "chip active" } else { "chip" }
                            on:click=move |_| on_toggle.run(chip_value.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
