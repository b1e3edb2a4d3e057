//! Product Endpoints

use super::client::{ApiClient, Method};
use crate::error::AppError;
use crate::models::{Product, ProductBatch, ProductDraft};

impl ApiClient {
    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.get("/products").await
    }

    pub async fn get_product(&self, id: u32) -> Result<Product, AppError> {
        self.get(&format!("/products/{}", id)).await
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, AppError> {
        self.send_json(Method::Post, "/products", draft).await
    }

    pub async fn update_product(&self, id: u32, draft: &ProductDraft) -> Result<Product, AppError> {
        self.send_json(Method::Put, &format!("/products/{}", id), draft).await
    }

    pub async fn delete_product(&self, id: u32) -> Result<String, AppError> {
        self.delete(&format!("/products/{}", id)).await
    }

    /// Harvest batches recorded for one product
    pub async fn list_product_batches(&self, product_id: u32) -> Result<Vec<ProductBatch>, AppError> {
        self.get(&format!("/products/{}/batches", product_id)).await
    }
}
