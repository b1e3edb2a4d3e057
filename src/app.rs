//! Harvest Market App
//!
//! Root component: provides shared context, keeps reference data loaded and
//! switches between screens.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::ToastHost;
use crate::config::AppConfig;
use crate::context::{AppContext, Screen};
use crate::fetch::{ticket_is_current, RequestGeneration};
use crate::pages::{
    AdminCategoriesPage, AdminProductsPage, AdminSeasonsPage, CatalogPage, FarmOrdersPage, FarmsPage,
    OrdersPage, ProductDetailPage,
};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(api: ApiClient, config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(api, config, store, signal(Screen::Catalog), signal(0u32));
    provide_context(ctx);

    // Categories and seasons feed filters and forms on several screens.
    // Each list is its own slot with its own request generation.
    let categories_generation = RequestGeneration::scoped();
    let seasons_generation = RequestGeneration::scoped();
    Effect::new(move |_| {
        let version = ctx.reference_version.get();

        if let Some(ticket) = categories_generation.try_with_value(|generation| generation.issue()) {
            let api = ctx.api();
            spawn_local(async move {
                let result = api.list_categories().await;
                if !ticket_is_current(categories_generation, ticket) {
                    return;
                }
                match result {
                    Ok(loaded) => {
                        log::debug!("reference data v{}: {} categories", version, loaded.len());
                        store.categories().set(loaded);
                    }
                    Err(err) => ctx.notify_error(&err),
                }
            });
        }

        if let Some(ticket) = seasons_generation.try_with_value(|generation| generation.issue()) {
            let api = ctx.api();
            spawn_local(async move {
                let result = api.list_seasons().await;
                if !ticket_is_current(seasons_generation, ticket) {
                    return;
                }
                match result {
                    Ok(loaded) => {
                        log::debug!("reference data v{}: {} seasons", version, loaded.len());
                        store.seasons().set(loaded);
                    }
                    Err(err) => ctx.notify_error(&err),
                }
            });
        }
    });

    view! {
        <div class="app-layout">
            <nav class="main-nav">
                <h1 class="brand">"Harvest Market"</h1>
                {Screen::NAV.into_iter().map(|(target, label)| {
                    view! {
                        <button
                            class=move || {
                                let current = ctx.screen.get();
                                let active = current == target
                                    || (target == Screen::Catalog && matches!(current, Screen::Product(_)));
                                if active { "nav-item active" } else { "nav-item" }
                            }
                            on:click=move |_| ctx.navigate(target)
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <main class="main-content">
                {move || match ctx.screen.get() {
                    Screen::Catalog => view! { <CatalogPage /> }.into_any(),
                    Screen::Product(id) => view! { <ProductDetailPage product_id=id /> }.into_any(),
                    Screen::Orders => view! { <OrdersPage /> }.into_any(),
                    Screen::Farms => view! { <FarmsPage /> }.into_any(),
                    Screen::FarmOrders => view! { <FarmOrdersPage /> }.into_any(),
                    Screen::AdminProducts => view! { <AdminProductsPage /> }.into_any(),
                    Screen::AdminCategories => view! { <AdminCategoriesPage /> }.into_any(),
                    Screen::AdminSeasons => view! { <AdminSeasonsPage /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
