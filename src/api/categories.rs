//! Category Endpoints

use super::client::{ApiClient, Method};
use crate::error::AppError;
use crate::models::{Category, CategoryDraft};

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.get("/categories").await
    }

    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, AppError> {
        self.send_json(Method::Post, "/categories", draft).await
    }

    pub async fn update_category(&self, id: u32, draft: &CategoryDraft) -> Result<Category, AppError> {
        self.send_json(Method::Put, &format!("/categories/{}", id), draft).await
    }

    pub async fn delete_category(&self, id: u32) -> Result<String, AppError> {
        self.delete(&format!("/categories/{}", id)).await
    }
}
