//! Season Endpoints

use super::client::{ApiClient, Method};
use crate::error::AppError;
use crate::models::{Season, SeasonDraft};

impl ApiClient {
    pub async fn list_seasons(&self) -> Result<Vec<Season>, AppError> {
        self.get("/seasons").await
    }

    pub async fn create_season(&self, draft: &SeasonDraft) -> Result<Season, AppError> {
        self.send_json(Method::Post, "/seasons", draft).await
    }

    pub async fn update_season(&self, id: u32, draft: &SeasonDraft) -> Result<Season, AppError> {
        self.send_json(Method::Put, &format!("/seasons/{}", id), draft).await
    }

    pub async fn delete_season(&self, id: u32) -> Result<String, AppError> {
        self.delete(&format!("/seasons/{}", id)).await
    }
}
