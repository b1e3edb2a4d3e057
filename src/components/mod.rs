//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod list_status;
mod multi_select_chips;
mod option_select;
mod pagination_bar;
mod range_filter;
mod search_box;
mod status_transition_form;
mod toast_host;

pub use delete_confirm_button::DeleteConfirmButton;
pub use list_status::ListStatus;
pub use multi_select_chips::MultiSelectChips;
pub use option_select::OptionSelect;
pub use pagination_bar::PaginationBar;
pub use range_filter::RangeFilter;
pub use search_box::SearchBox;
pub use status_transition_form::StatusTransitionForm;
pub use toast_host::ToastHost;
