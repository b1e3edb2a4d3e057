//! Farm Endpoints

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::client::ApiClient;
use crate::error::AppError;
use crate::models::Farm;

impl ApiClient {
    /// Farms, optionally narrowed to one region
    pub async fn list_farms(&self, region: Option<&str>) -> Result<Vec<Farm>, AppError> {
        self.get(&farms_path(region)).await
    }
}

fn farms_path(region: Option<&str>) -> String {
    match region.map(str::trim).filter(|region| !region.is_empty()) {
        Some(region) => format!("/farms?region={}", utf8_percent_encode(region, NON_ALPHANUMERIC)),
        None => "/farms".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farms_path_encodes_region() {
        assert_eq!(farms_path(None), "/farms");
        assert_eq!(farms_path(Some("  ")), "/farms");
        assert_eq!(farms_path(Some("Rhône Valley")), "/farms?region=Rh%C3%B4ne%20Valley");
    }
}
