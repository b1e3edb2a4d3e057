//! Status Transition Form Component
//!
//! Two-step order status change: pick the next status, then confirm with an
//! optional note (required for cancellations).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::fetch::BusyFlag;
use crate::models::{Order, OrderStatus, StatusChange};
use crate::validation::validate_status_change;

#[component]
pub fn StatusTransitionForm(order: Order, #[prop(into)] on_updated: Callback<Order>) -> impl IntoView {
    let ctx = use_app();
    let busy = BusyFlag::new();
    let order_id = order.id;
    let current = order.status;

    let (target, set_target) = signal::<Option<OrderStatus>>(None);
    let (note, set_note) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(status) = target.get_untracked() else {
            return;
        };
        let note_text = note.get_untracked();
        let change = StatusChange {
            status,
            note: Some(note_text.trim().to_string()).filter(|text| !text.is_empty()),
        };
        if let Err(err) = validate_status_change(current, &change) {
            ctx.notify_error(&err);
            return;
        }
        let Some(guard) = busy.try_acquire() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let _guard = guard;
            match api.update_order_status(order_id, &change).await {
                Ok(updated) => {
                    log::info!("order {} moved to {}", order_id, updated.status.as_str());
                    ctx.notify_success(format!("Order marked {}", updated.status.label()));
                    let _ = set_target.try_set(None);
                    let _ = set_note.try_set(String::new());
                    on_updated.run(updated);
                }
                Err(err) => ctx.notify_error(&err),
            }
        });
    };

    if current.is_terminal() {
        return view! { <span class="status-final">{current.label()}</span> }.into_any();
    }

    view! {
        <form class="status-form" on:submit=submit>
            {move || match target.get() {
                None => view! {
                    <div class="status-step choose">
                        {current.allowed_transitions().iter().map(|next| {
                            let next = *next;
                            view! {
                                <button
                                    type="button"
                                    class="status-btn"
                                    on:click=move |_| set_target.set(Some(next))
                                >
                                    {format!("→ {}", next.label())}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_any(),
                Some(next) => {
                    let placeholder = if next == OrderStatus::Cancelled { "Reason (required)" } else { "Note (optional)" };
                    view! {
                        <div class="status-step confirm">
                            <span>{format!("{} → {}", current.label(), next.label())}</span>
                            <input
                                type="text"
                                placeholder=placeholder
                                prop:value=move || note.get()
                                on:input=move |ev| set_note.set(event_target_value(&ev))
                            />
                            <button type="submit" disabled=move || busy.is_busy()>"Confirm"</button>
                            <button type="button" on:click=move |_| set_target.set(None)>"Back"</button>
                        </div>
                    }.into_any()
                }
            }}
        </form>
    }
    .into_any()
}
