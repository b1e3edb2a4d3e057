//! Screens
//!
//! One component per navigation target.

mod admin_categories;
mod admin_products;
mod admin_seasons;
mod catalog;
mod farm_orders;
mod farms;
pub mod orders;
mod product_detail;

pub use admin_categories::AdminCategoriesPage;
pub use admin_products::AdminProductsPage;
pub use admin_seasons::AdminSeasonsPage;
pub use catalog::CatalogPage;
pub use farm_orders::FarmOrdersPage;
pub use farms::FarmsPage;
pub use orders::OrdersPage;
pub use product_detail::ProductDetailPage;
