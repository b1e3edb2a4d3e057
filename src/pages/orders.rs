//! Orders Page
//!
//! Order history of the signed-in customer.

use leptos::prelude::*;

use crate::components::{ListStatus, MultiSelectChips, PaginationBar, RangeFilter, SearchBox};
use crate::context::use_app;
use crate::listing::ListingSignals;
use crate::models::{Order, OrderStatus};

/// `(value, label)` chip options for every order status
pub fn status_options() -> Vec<(String, String)> {
    OrderStatus::ALL
        .iter()
        .map(|status| (status.as_str().to_string(), status.label().to_string()))
        .collect()
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let ctx = use_app();
    let orders = ListingSignals::<Order>::new(ctx.page_size());

    let refresh = move || {
        let api = ctx.api();
        orders.load(async move { api.list_my_orders().await }, move |err| ctx.notify_error(&err));
    };
    Effect::new(move |_| refresh());

    view! {
        <section class="page orders">
            <header class="page-header">
                <h2>"My Orders"</h2>
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
                <RangeFilter
                    label="Total"
                    bounds=Signal::derive(move || orders.bounds())
                    range=Signal::derive(move || orders.criteria().numeric_range)
                    on_change={move |range: Option<(f64, f64)>| orders.set_range(range)}
                />
                <button class="clear-btn" on:click=move |_| orders.clear_filters()>"Clear filters"</button>
            </div>

            <ListStatus
                state=Signal::derive(move || orders.load_state())
                empty=Signal::derive(move || orders.filtered_len.get() == 0)
                empty_message="No orders yet"
            />

            <table class="data-table">
                <thead>
                    <tr><th>"Order"</th><th>"Placed"</th><th>"Items"</th><th>"Status"</th><th>"Total"</th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || orders.visible.get()
                        key=|order| (order.id, order.status)
                        children=move |order| {
                            let items = order
                                .lines
                                .iter()
                                .map(|line| format!("{} × {}", line.quantity, line.product_name))
                                .collect::<Vec<_>>()
                                .join(", ");
                            view! {
                                <tr>
                                    <td>{order.order_number.clone()}</td>
                                    <td>{order.placed_at.format("%Y-%m-%d %H:%M").to_string()}</td>
                                    <td>{items}</td>
                                    <td class=format!("status {}", order.status.as_str())>{order.status.label()}</td>
                                    <td>{format!("${:.2}", order.total_amount)}</td>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_cover_every_status() {
        let options = status_options();
        assert_eq!(options.len(), OrderStatus::ALL.len());
        assert_eq!(options[0], ("pending".to_string(), "Pending".to_string()));
    }
}
