//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::store::{store_dismiss_toast, store_push_toast, AppStore, ToastKind};

/// Screens reachable from the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    /// Product detail with its harvest batches
    Product(u32),
    Orders,
    Farms,
    FarmOrders,
    AdminProducts,
    AdminCategories,
    AdminSeasons,
}

impl Screen {
    pub const NAV: [(Screen, &'static str); 7] = [
        (Screen::Catalog, "Catalog"),
        (Screen::Farms, "Farms"),
        (Screen::Orders, "My Orders"),
        (Screen::FarmOrders, "Farm Orders"),
        (Screen::AdminProducts, "Products"),
        (Screen::AdminCategories, "Categories"),
        (Screen::AdminSeasons, "Seasons"),
    ];
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient>,
    config: StoredValue<AppConfig>,
    store: AppStore,
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    /// Current screen - write
    set_screen: WriteSignal<Screen>,
    /// Bumped when categories/seasons change - read
    pub reference_version: ReadSignal<u32>,
    /// Bumped when categories/seasons change - write
    set_reference_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        api: ApiClient,
        config: AppConfig,
        store: AppStore,
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        reference_version: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            api: StoredValue::new(api),
            config: StoredValue::new(config),
            store,
            screen: screen.0,
            set_screen: screen.1,
            reference_version: reference_version.0,
            set_reference_version: reference_version.1,
        }
    }

    /// API client handle (cheap clone, shares credentials)
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(|config| config.default_page_size)
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    pub fn navigate(&self, screen: Screen) {
        log::debug!("navigate to {:?}", screen);
        self.set_screen.set(screen);
    }

    /// Trigger a reload of categories and seasons
    pub fn reload_reference_data(&self) {
        self.set_reference_version.update(|v| *v += 1);
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Success, message.into());
    }

    /// Surface any error as a toast; nothing propagates past the screen
    pub fn notify_error(&self, err: &AppError) {
        self.push_toast(ToastKind::Error, err.user_message());
    }

    fn push_toast(&self, kind: ToastKind, message: String) {
        let store = self.store;
        let timeout = self.config.with_value(|config| config.toast_timeout_ms);
        let id = store_push_toast(&store, kind, message);
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            store_dismiss_toast(&store, id);
        });
    }
}

/// Context accessor used by every screen
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
