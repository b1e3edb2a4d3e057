//! Order Endpoints

use super::client::{ApiClient, Method};
use crate::error::AppError;
use crate::models::{Order, StatusChange};

impl ApiClient {
    /// Order history of the signed-in customer
    pub async fn list_my_orders(&self) -> Result<Vec<Order>, AppError> {
        self.get("/orders/mine").await
    }

    /// Orders received by the signed-in farmer
    pub async fn list_farm_orders(&self) -> Result<Vec<Order>, AppError> {
        self.get("/orders").await
    }

    pub async fn update_order_status(&self, id: u32, change: &StatusChange) -> Result<Order, AppError> {
        self.send_json(Method::Patch, &format!("/orders/{}/status", id), change).await
    }
}
