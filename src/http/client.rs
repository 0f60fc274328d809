//! Low-level HTTP client: `CopyTradeHttp`.
//!
//! Executes exactly one request per call and maps the outcome onto
//! [`HttpError`]: no retries, no caching, no status interpretation. The
//! sub-clients in `domain/*/client.rs` and `auth/client.rs` pass paths relative
//! to the configured base URL.

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::HttpError;

/// Low-level HTTP client for the copy-trading REST API.
#[derive(Clone)]
pub struct CopyTradeHttp {
    base_url: String,
    client: Client,
    /// Bearer token attached to every request. Never exposed publicly.
    access_token: Option<String>,
}

impl CopyTradeHttp {
    /// Wrap an existing transport. The base URL's trailing `/` is trimmed.
    pub fn new(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            access_token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }

    pub(crate) fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    // ── Verbs ────────────────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, HttpError> {
        self.execute(Method::GET, path, query, None::<&()>).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.execute(Method::POST, path, &[], Some(body)).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.execute(Method::PUT, path, &[], Some(body)).await
    }

    // ── Execution ────────────────────────────────────────────────────────

    async fn execute<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method.clone(), &url);

        if let Some(token) = self.access_token.as_deref() {
            req = req.bearer_auth(token);
        }
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(method = %method, url = %url, params = query.len(), "Sending request");

        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = match resp.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Failed to read error response body: {}", e);
                    format!("HTTP {} (body unreadable: {})", status, e)
                }
            };
            tracing::debug!(method = %method, url = %url, status = status.as_u16(), "Request failed");
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await?;
        match serde_json::from_str::<T>(&text) {
            Ok(parsed) => Ok(parsed),
            Err(source) => Err(HttpError::Decode { source, body: text }),
        }
    }
}

impl std::fmt::Debug for CopyTradeHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyTradeHttp")
            .field("base_url", &self.base_url)
            .field("has_access_token", &self.access_token.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let http = CopyTradeHttp::new("http://localhost:8000/api/", Client::new());
        assert_eq!(http.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut http = CopyTradeHttp::new("http://localhost:8000/api", Client::new());
        http.set_access_token(Some("secret-access".to_string()));
        let rendered = format!("{:?}", http);
        assert!(!rendered.contains("secret-access"));
        assert!(rendered.contains("has_access_token: true"));
    }
}
