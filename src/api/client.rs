use crate::auth::session::{stored_token, SharedSessionStore};
use reqwest::{multipart, Client, Error as ReqwestError, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Not authorized")]
    Unauthorized,
    #[error("Not found")]
    NotFound,
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    Backend(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Reply of `POST api/upload/image`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UploadedImage {
    #[serde(alias = "imageUrl")]
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Thin JSON client for the booking backend
///
/// Every endpoint path is relative to the configured base URL. The bearer
/// token is read from the session store on each call, so logging in or out
/// takes effect immediately.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SharedSessionStore,
}

impl ApiClient {
    pub fn new(base_url: String, session: SharedSessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: crate::config::normalize_base_url(&base_url),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SharedSessionStore {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match stored_token(self.session.as_ref()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        info!("📡 GET {} {:?}", url, query);

        let request = self
            .client
            .get(&url)
            .query(query)
            .header("Accept", "application/json");
        let response = self.authorize(request).send().await?;
        decode_response(response).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        info!("📡 POST {}", url);

        let request = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(body);
        let response = self.authorize(request).send().await?;
        decode_response(response).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        info!("📡 PUT {}", url);

        let request = self
            .client
            .put(&url)
            .header("Accept", "application/json")
            .json(body);
        let response = self.authorize(request).send().await?;
        decode_response(response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        info!("📡 DELETE {}", url);

        let request = self.client.delete(&url).header("Accept", "application/json");
        let response = self.authorize(request).send().await?;
        decode_response(response).await
    }

    /// Upload one image file as multipart form field `file`
    pub async fn upload_image(&self, file_path: &Path) -> Result<UploadedImage, ApiError> {
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ApiError::InvalidInput(format!("Not a file: {}", file_path.display()))
            })?;

        let bytes = tokio::fs::read(file_path).await?;
        info!("📤 Uploading {} ({} bytes)", file_name, bytes.len());

        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("file", part);

        let request = self.client.post(self.url("api/upload/image")).multipart(form);
        let response = self.authorize(request).send().await?;
        decode_response(response).await
    }
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    debug!("Response status: {}", status);

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        warn!("✗ Request rejected: {}", status);
        return Err(ApiError::Unauthorized);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }

    let body = response.text().await?;
    if !status.is_success() {
        warn!("✗ API error {}: {}", status, body);
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| backend_error(&v))
            .unwrap_or(body);
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: message,
        });
    }

    parse_body(&body)
}

/// Decode a successful body, surfacing `error` / `errors` fields the
/// backend puts in 200 replies
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body)?
    };

    if let Some(message) = backend_error(&value) {
        warn!("✗ Backend reported error: {}", message);
        return Err(ApiError::Backend(message));
    }

    Ok(serde_json::from_value(value)?)
}

fn backend_error(value: &Value) -> Option<String> {
    let object = value.as_object()?;

    if let Some(error) = object.get("error") {
        match error {
            Value::Null | Value::Bool(false) => {}
            Value::String(message) => return Some(message.clone()),
            other => return Some(other.to_string()),
        }
    }

    match object.get("errors") {
        Some(Value::Array(errors)) if !errors.is_empty() => Some(
            errors
                .iter()
                .map(|e| match e {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::MemorySessionStore;
    use crate::models::Hotel;

    #[test]
    fn test_url_joins_relative_paths() {
        let client = ApiClient::new(
            "http://localhost:8888".to_string(),
            MemorySessionStore::shared(),
        );
        assert_eq!(client.base_url(), "http://localhost:8888/");
        assert_eq!(client.url("api/hotels"), "http://localhost:8888/api/hotels");
        assert_eq!(
            client.url("/api/payments/confirmation"),
            "http://localhost:8888/api/payments/confirmation"
        );
    }

    #[test]
    fn test_parse_body_reports_backend_errors() {
        let err = parse_body::<Value>(r#"{"error": "Email already used"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Backend(ref m) if m == "Email already used"));

        let err = parse_body::<Value>(r#"{"errors": ["a", "b"]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Backend(ref m) if m == "a, b"));

        let ok: Value = parse_body(r#"{"errors": [], "message": "ok"}"#).unwrap();
        assert_eq!(ok["message"], "ok");
    }

    #[test]
    fn test_parse_body_empty_and_typed() {
        let empty: Option<Hotel> = parse_body("").unwrap();
        assert!(empty.is_none());

        let hotels: Vec<Hotel> =
            parse_body(r#"[{"hotelId": 1, "title": "A"}, {"hotelId": 2}]"#).unwrap();
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].title, "A");
    }
}
