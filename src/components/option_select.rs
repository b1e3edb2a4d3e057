//! Option Select Component
//!
//! Dropdown over `(id, label)` pairs with an "all" entry meaning no selection.
//! Used for category and season filters and form fields.

use leptos::prelude::*;

#[component]
pub fn OptionSelect(
    #[prop(into)] options: Signal<Vec<(u32, String)>>,
    #[prop(into)] selected: Signal<Option<u32>>,
    #[prop(into)] on_change: Callback<Option<u32>>,
    /// Label of the empty entry ("All categories", "Select...")
    #[prop(into)] none_label: String,
) -> impl IntoView {
    view! {
        <select
            class="option-select"
            prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
            on:change=move |ev| on_change.run(event_target_value(&ev).parse::<u32>().ok())
        >
            <option value="">{none_label}</option>
            <For
                each=move || options.get()
                key=|(id, label)| (*id, label.clone())
                children=move |(id, label)| {
                    view! {
                        <option value=id.to_string() selected=move || selected.get() == Some(id)>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
