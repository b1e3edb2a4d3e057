//! List Status Component
//!
//! Loading indicator, inline fetch error, or empty state for a list.

use leptos::prelude::*;

use crate::fetch::LoadState;

#[component]
pub fn ListStatus(
    #[prop(into)] state: Signal<LoadState>,
    /// True when nothing matches the current criteria
    #[prop(into)] empty: Signal<bool>,
    #[prop(into)] empty_message: String,
) -> impl IntoView {
    move || {
        let current = state.get();
        if current.is_loading() {
            return view! { <div class="list-status loading">"Loading…"</div> }.into_any();
        }
        if let Some(message) = current.error_message() {
            return view! { <div class="list-status error">{message.to_string()}</div> }.into_any();
        }
        if empty.get() {
            return view! { <div class="list-status empty">{empty_message.clone()}</div> }.into_any();
        }
        view! { <div></div> }.into_any()
    }
}
