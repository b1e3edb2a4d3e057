//! Frontend Models
//!
//! Data structures matching the marketplace API payloads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::Filterable;

/// Product listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_id: Option<u32>,
    pub farm_id: u32,
    #[serde(default)]
    pub farm_name: String,
    pub price: f64,
    pub unit: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub is_organic: bool,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Growing season used to group product batches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: u32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub region: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub product_count: u32,
}

/// One harvest lot of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBatch {
    pub id: u32,
    pub product_id: u32,
    pub season_id: Option<u32>,
    pub batch_code: String,
    pub harvest_date: NaiveDate,
    pub quantity: f64,
    pub quality_grade: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire name, also used as the multi-select filter value
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Statuses an order may move to next
    pub fn allowed_transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Confirmed, OrderStatus::Cancelled],
            OrderStatus::Confirmed => &[OrderStatus::Shipped, OrderStatus::Cancelled],
            OrderStatus::Shipped => &[OrderStatus::Delivered],
            OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: u32,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub order_number: String,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub placed_at: DateTime<Utc>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

// ========================
// Mutation payloads
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub category_id: Option<u32>,
    pub price: f64,
    pub unit: String,
    pub stock: u32,
    pub is_organic: bool,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            category_id: product.category_id,
            price: product.price,
            unit: product.unit.clone(),
            stock: product.stock,
            is_organic: product.is_organic,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDraft {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: String,
}

impl From<&Season> for SeasonDraft {
    fn from(season: &Season) -> Self {
        Self {
            name: season.name.clone(),
            start_date: Some(season.start_date),
            end_date: Some(season.end_date),
            description: season.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusChange {
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// ========================
// Filtering hooks
// ========================

impl Filterable for Product {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str(), self.unit.as_str()]
    }

    fn category_id(&self) -> Option<u32> {
        self.category_id
    }

    fn discriminant(&self) -> Option<&str> {
        Some(&self.farm_name)
    }

    fn numeric_value(&self) -> Option<f64> {
        Some(self.price)
    }
}

impl Filterable for Category {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Filterable for Season {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Filterable for Farm {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str(), self.address.as_str()]
    }

    fn discriminant(&self) -> Option<&str> {
        Some(&self.region)
    }
}

impl Filterable for ProductBatch {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.batch_code.as_str(), self.quality_grade.as_str()]
    }

    fn category_id(&self) -> Option<u32> {
        self.season_id
    }

    fn discriminant(&self) -> Option<&str> {
        Some(&self.quality_grade)
    }

    fn numeric_value(&self) -> Option<f64> {
        Some(self.quantity)
    }
}

impl Filterable for Order {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.order_number.as_str()];
        fields.extend(self.lines.iter().map(|line| line.product_name.as_str()));
        fields
    }

    fn discriminant(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn numeric_value(&self) -> Option<f64> {
        Some(self.total_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_transitions() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Confirmed));
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Shipped.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn test_status_wire_names() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        assert!(serde_json::from_str::<OrderStatus>("\"lost\"").is_err());
    }

    #[test]
    fn test_order_deserializes_camel_case() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": 7,
            "orderNumber": "ORD-0007",
            "status": "shipped",
            "totalAmount": 42.5,
            "placedAt": "2026-05-01T10:00:00Z",
            "lines": [
                { "productId": 1, "productName": "Organic Tomatoes", "quantity": 3, "unitPrice": 4.5 }
            ]
        }))
        .unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.lines[0].product_name, "Organic Tomatoes");
        assert_eq!(order.search_fields(), vec!["ORD-0007", "Organic Tomatoes"]);
    }

    #[test]
    fn test_product_defaults_optional_fields() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Fresh Carrots",
            "categoryId": null,
            "farmId": 2,
            "price": 2.0,
            "unit": "kg",
            "imageUrl": null
        }))
        .unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.stock, 0);
        assert!(!product.is_organic);
    }

    #[test]
    fn test_status_change_omits_empty_note() {
        let change = StatusChange { status: OrderStatus::Confirmed, note: None };
        assert_eq!(serde_json::to_value(&change).unwrap(), serde_json::json!({ "status": "confirmed" }));
    }
}
