//! HTTP Client
//!
//! One Fetch API request per call. Every operation returns
//! `Result<T, AppError>`: a `success: false` envelope becomes
//! `AppError::Business` with the server message, anything unreadable
//! becomes `AppError::Transport`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::credentials::CredentialProvider;
use crate::config::AppConfig;
use crate::error::AppError;

/// Response wrapper every API endpoint uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Status and raw body text of a completed request
struct RawResponse {
    status: u16,
    body: Option<String>,
}

/// API client with the session credentials injected at construction
#[derive(Clone)]
pub struct ApiClient {
    config: AppConfig,
    credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(config: AppConfig, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self { config, credentials }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let raw = self.send(Method::Get, path, None).await?;
        interpret_envelope(raw.status, raw.body.as_deref())
    }

    pub async fn send_json<B, T>(&self, method: Method, path: &str, payload: &B) -> Result<T, AppError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(payload)
            .map_err(|e| AppError::transport(format!("could not encode request: {}", e)))?;
        let raw = self.send(method, path, Some(body)).await?;
        interpret_envelope(raw.status, raw.body.as_deref())
    }

    /// DELETE; returns the server's confirmation message
    pub async fn delete(&self, path: &str) -> Result<String, AppError> {
        let raw = self.send(Method::Delete, path, None).await?;
        interpret_ack(raw.status, raw.body.as_deref())
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<RawResponse, AppError> {
        let url = self.config.url_for(path);
        log::debug!("{} {}", method.as_str(), url);

        let init = RequestInit::new();
        init.set_method(method.as_str());
        init.set_mode(RequestMode::Cors);
        if let Some(body) = body.as_deref() {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
        let headers = request.headers();
        headers.set("Accept", "application/json").map_err(js_error)?;
        if body.is_some() {
            headers.set("Content-Type", "application/json").map_err(js_error)?;
        }
        if let Some(token) = self.credentials.bearer_token() {
            headers
                .set("Authorization", &format!("Bearer {}", token))
                .map_err(js_error)?;
        }

        let window = web_sys::window().ok_or_else(|| AppError::transport("no browser window"))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let status = response.status();
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise).await.ok().and_then(|text| text.as_string()),
            Err(_) => None,
        };
        log::debug!("{} {} -> {}", method.as_str(), url, status);
        Ok(RawResponse { status, body })
    }
}

/// Turn a response body into the envelope's data
pub fn interpret_envelope<T: DeserializeOwned>(status: u16, body: Option<&str>) -> Result<T, AppError> {
    let envelope = parse_envelope(status, body)?;
    if !envelope.success {
        return Err(business_error(status, envelope.message));
    }
    // Missing data is only acceptable for types that deserialize from null
    let data = envelope.data.unwrap_or(serde_json::Value::Null);
    serde_json::from_value(data)
        .map_err(|e| AppError::transport(format!("unexpected response data: {}", e)))
}

/// Like `interpret_envelope`, for endpoints that only acknowledge
pub fn interpret_ack(status: u16, body: Option<&str>) -> Result<String, AppError> {
    let envelope = parse_envelope(status, body)?;
    if envelope.success {
        Ok(envelope.message)
    } else {
        Err(business_error(status, envelope.message))
    }
}

fn parse_envelope(status: u16, body: Option<&str>) -> Result<Envelope<serde_json::Value>, AppError> {
    let text = body.map(str::trim).filter(|text| !text.is_empty());
    let Some(text) = text else {
        return Err(AppError::transport(format!("empty response (HTTP {})", status)));
    };
    serde_json::from_str(text).map_err(|e| {
        if is_success(status) {
            AppError::transport(format!("malformed response: {}", e))
        } else {
            AppError::transport(format!("HTTP {}", status))
        }
    })
}

fn business_error(status: u16, message: String) -> AppError {
    if message.trim().is_empty() {
        AppError::Business(format!("Request rejected (HTTP {})", status))
    } else {
        AppError::Business(message)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn js_error(value: JsValue) -> AppError {
    let detail = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    AppError::Transport(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_success_returns_data() {
        let body = r#"{"success":true,"message":"ok","data":[{"id":1,"name":"Vegetables"}]}"#;
        let categories: Vec<Category> = interpret_envelope(200, Some(body)).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Vegetables");
    }

    #[test]
    fn test_business_failure_surfaces_message_verbatim() {
        let body = r#"{"success":false,"message":"DB unavailable"}"#;
        let err = interpret_envelope::<Vec<Category>>(500, Some(body)).unwrap_err();
        assert_eq!(err, AppError::Business("DB unavailable".to_string()));
    }

    #[test]
    fn test_business_failure_without_message() {
        let body = r#"{"success":false}"#;
        let err = interpret_envelope::<Vec<Category>>(409, Some(body)).unwrap_err();
        assert_eq!(err, AppError::Business("Request rejected (HTTP 409)".to_string()));
    }

    #[test]
    fn test_non_json_error_page_is_transport() {
        let err = interpret_envelope::<Vec<Category>>(502, Some("<html>Bad Gateway</html>")).unwrap_err();
        assert_eq!(err, AppError::Transport("HTTP 502".to_string()));
    }

    #[test]
    fn test_malformed_success_body_is_transport() {
        let err = interpret_envelope::<Vec<Category>>(200, Some("{not json")).unwrap_err();
        assert!(matches!(err, AppError::Transport(ref detail) if detail.starts_with("malformed response")));
    }

    #[test]
    fn test_empty_body_is_transport() {
        let err = interpret_envelope::<Vec<Category>>(204, None).unwrap_err();
        assert_eq!(err, AppError::Transport("empty response (HTTP 204)".to_string()));
    }

    #[test]
    fn test_missing_data_for_required_type_is_transport() {
        let body = r#"{"success":true,"message":"ok"}"#;
        let err = interpret_envelope::<Vec<Category>>(200, Some(body)).unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));

        let unit: Option<Category> = interpret_envelope(200, Some(body)).unwrap();
        assert_eq!(unit, None);
    }

    #[test]
    fn test_ack_returns_message() {
        let body = r#"{"success":true,"message":"Product deleted"}"#;
        assert_eq!(interpret_ack(200, Some(body)).unwrap(), "Product deleted");

        let rejected = r#"{"success":false,"message":"Product has open orders"}"#;
        assert_eq!(
            interpret_ack(400, Some(rejected)).unwrap_err(),
            AppError::Business("Product has open orders".to_string())
        );
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
