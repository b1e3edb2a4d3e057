//! Form Validation
//!
//! Checks run before a mutation is sent. A failure here never reaches the
//! network.

use crate::error::AppError;
use crate::models::{CategoryDraft, OrderStatus, ProductDraft, SeasonDraft, StatusChange};

const MAX_CATEGORY_NAME: usize = 60;

pub fn validate_product(draft: &ProductDraft) -> Result<(), AppError> {
    require_text("name", &draft.name)?;
    if !draft.price.is_finite() || draft.price <= 0.0 {
        return Err(AppError::validation("price", "must be greater than zero"));
    }
    require_text("unit", &draft.unit)?;
    if draft.category_id.is_none() {
        return Err(AppError::validation("category", "select a category"));
    }
    Ok(())
}

pub fn validate_category(draft: &CategoryDraft) -> Result<(), AppError> {
    require_text("name", &draft.name)?;
    if draft.name.trim().chars().count() > MAX_CATEGORY_NAME {
        return Err(AppError::validation(
            "name",
            format!("must be at most {} characters", MAX_CATEGORY_NAME),
        ));
    }
    Ok(())
}

pub fn validate_season(draft: &SeasonDraft) -> Result<(), AppError> {
    require_text("name", &draft.name)?;
    let start = draft
        .start_date
        .ok_or_else(|| AppError::validation("start date", "is required"))?;
    let end = draft
        .end_date
        .ok_or_else(|| AppError::validation("end date", "is required"))?;
    if start >= end {
        return Err(AppError::validation("end date", "must be after the start date"));
    }
    Ok(())
}

/// Status change must follow the order status machine; cancelling needs a reason
pub fn validate_status_change(current: OrderStatus, change: &StatusChange) -> Result<(), AppError> {
    if !current.can_transition_to(change.status) {
        return Err(AppError::validation(
            "status",
            format!("cannot move from {} to {}", current.label(), change.status.label()),
        ));
    }
    let has_note = change.note.as_deref().is_some_and(|note| !note.trim().is_empty());
    if change.status == OrderStatus::Cancelled && !has_note {
        return Err(AppError::validation("note", "a reason is required to cancel"));
    }
    Ok(())
}

fn require_text(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::validation(field, "is required"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn product() -> ProductDraft {
        ProductDraft {
            name: "Organic Tomatoes".into(),
            category_id: Some(1),
            price: 4.5,
            unit: "kg".into(),
            ..Default::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_valid_product() {
        assert!(validate_product(&product()).is_ok());
    }

    #[test]
    fn test_product_field_errors() {
        let blank = ProductDraft { name: "  ".into(), ..product() };
        assert_eq!(validate_product(&blank), Err(AppError::validation("name", "is required")));

        let free = ProductDraft { price: 0.0, ..product() };
        assert!(matches!(validate_product(&free), Err(AppError::Validation { field: "price", .. })));

        let nan = ProductDraft { price: f64::NAN, ..product() };
        assert!(validate_product(&nan).is_err());

        let no_category = ProductDraft { category_id: None, ..product() };
        assert!(matches!(validate_product(&no_category), Err(AppError::Validation { field: "category", .. })));
    }

    #[test]
    fn test_category_name_rules() {
        assert!(validate_category(&CategoryDraft { name: "Dairy".into(), description: String::new() }).is_ok());
        assert!(validate_category(&CategoryDraft::default()).is_err());
        let long = CategoryDraft { name: "x".repeat(61), description: String::new() };
        assert!(validate_category(&long).is_err());
    }

    #[test]
    fn test_season_dates() {
        let season = SeasonDraft {
            name: "Spring 2026".into(),
            start_date: date(2026, 3, 1),
            end_date: date(2026, 5, 31),
            description: String::new(),
        };
        assert!(validate_season(&season).is_ok());

        let backwards = SeasonDraft { end_date: date(2026, 2, 1), ..season.clone() };
        assert!(matches!(validate_season(&backwards), Err(AppError::Validation { field: "end date", .. })));

        let missing = SeasonDraft { start_date: None, ..season };
        assert!(matches!(validate_season(&missing), Err(AppError::Validation { field: "start date", .. })));
    }

    #[test]
    fn test_status_change_rules() {
        let confirm = StatusChange { status: OrderStatus::Confirmed, note: None };
        assert!(validate_status_change(OrderStatus::Pending, &confirm).is_ok());
        assert!(validate_status_change(OrderStatus::Delivered, &confirm).is_err());

        let cancel = StatusChange { status: OrderStatus::Cancelled, note: Some(" ".into()) };
        assert!(matches!(
            validate_status_change(OrderStatus::Pending, &cancel),
            Err(AppError::Validation { field: "note", .. })
        ));

        let cancel = StatusChange { status: OrderStatus::Cancelled, note: Some("Out of stock".into()) };
        assert!(validate_status_change(OrderStatus::Confirmed, &cancel).is_ok());
    }
}
