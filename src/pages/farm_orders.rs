//! Farm Orders Page
//!
//! Orders received by the farm, each with its status transition form.

use leptos::prelude::*;

use crate::components::{ListStatus, MultiSelectChips, PaginationBar, SearchBox, StatusTransitionForm};
use crate::context::use_app;
use crate::listing::ListingSignals;
use crate::models::Order;
use crate::pages::orders::status_options;

#[component]
pub fn FarmOrdersPage() -> impl IntoView {
    let ctx = use_app();
    let orders = ListingSignals::<Order>::new(ctx.page_size());

    let refresh = move || {
        let api = ctx.api();
        orders.load(async move { api.list_farm_orders().await }, move |err| ctx.notify_error(&err));
    };
    Effect::new(move |_| refresh());

    view! {
        <section class="page farm-orders">
            <header class="page-header">
                <h2>"Farm Orders"</h2>
                <button class="refresh-btn" disabled=move || orders.is_loading() on:click=move |_| refresh()>
                    "Refresh"
                </button>
            </header>

            <div class="filter-bar">
                <SearchBox
                    value=Signal::derive(move || orders.criteria().search_text)
                    on_input={move |text: String| orders.set_search(text)}
                    placeholder="Order number or product…"
                />
                <MultiSelectChips
                    options=Signal::derive(status_options)
                    selected=Signal::derive(move || orders.criteria().selected_values)
                    on_toggle={move |status: String| orders.toggle_value(&status)}
                />
            </div>

            <ListStatus
                state=Signal::derive(move || orders.load_state())
                empty=Signal::derive(move || orders.filtered_len.get() == 0)
                empty_message="No orders to handle"
            />

            <table class="data-table">
                <thead>
                    <tr><th>"Order"</th><th>"Placed"</th><th>"Total"</th><th>"Status"</th><th>"Next step"</th></tr>
                </thead>
                <tbody>
                    // Keyed on status too so the form resets after a transition
                    <For
                        each=move || orders.visible.get()
                        key=|order| (order.id, order.status)
                        children=move |order| {
                            view! {
                                <tr>
                                    <td>{order.order_number.clone()}</td>
                                    <td>{order.placed_at.format("%Y-%m-%d").to_string()}</td>
                                    <td>{format!("${:.2}", order.total_amount)}</td>
                                    <td class=format!("status {}", order.status.as_str())>{order.status.label()}</td>
                                    <td>
                                        <StatusTransitionForm
                                            order=order.clone()
                                            on_updated={move |updated: Order| orders.replace(updated)}
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <PaginationBar listing=orders />
        </section>
    }
}
