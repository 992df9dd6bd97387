//! MindWell backend API client.
//!
//! Every call is a single buffered request through [`HttpClient`]; there is
//! no retry or backoff. Non-2xx answers become [`ApiError::Status`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::adapters::ReqwestHttpClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    CategoriesResponse, CategoryFilter, ChatReply, ChatRequest, ChatResponse, CrisisResources,
    MoodEntry, MoodHistoryResponse, MoodSubmission, Resource, ResourcesResponse,
};
use crate::traits::{Headers, HttpClient, Response};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Client for the MindWell REST API.
pub struct BackendClient {
    /// Base URL without a trailing slash
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl BackendClient {
    /// Create a client for [`DEFAULT_BACKEND_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BACKEND_URL)
    }

    /// Create a reqwest-backed client for a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client over any [`HttpClient`] implementation.
    pub fn with_http_client(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    /// URL for a resources listing. The unfiltered collection carries no
    /// query string.
    pub fn resources_url(&self, category: &CategoryFilter) -> String {
        match category.query_value() {
            None => self.url("/api/resources"),
            Some(tag) => format!(
                "{}?category={}",
                self.url("/api/resources"),
                urlencoding::encode(tag)
            ),
        }
    }

    fn check_status(response: Response) -> ApiResult<Response> {
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: response.status,
                body: response.text(),
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {}", url);
        let response = self.http.get(url, &Headers::new()).await?;
        let response = Self::check_status(response)?;
        Ok(response.json()?)
    }

    async fn post_json(&self, url: &str, body: &impl serde::Serialize) -> ApiResult<Response> {
        let body = serde_json::to_string(body)?;
        debug!("POST {} ({} bytes)", url, body.len());
        Ok(self.http.post(url, &body, &Self::json_headers()).await?)
    }

    /// Fetch resources, scoped to `category` unless it is `All`.
    pub async fn fetch_resources(&self, category: &CategoryFilter) -> ApiResult<Vec<Resource>> {
        let envelope: ResourcesResponse = self.get_json(&self.resources_url(category)).await?;
        Ok(envelope.resources)
    }

    /// Fetch category filters with the synthetic `All` first.
    pub async fn fetch_categories(&self) -> ApiResult<Vec<CategoryFilter>> {
        let envelope: CategoriesResponse =
            self.get_json(&self.url("/api/resources/categories")).await?;
        Ok(CategoryFilter::with_all(envelope.categories))
    }

    /// Fetch mood history, most recent first as the server sorts it.
    pub async fn fetch_mood_history(&self) -> ApiResult<Vec<MoodEntry>> {
        let envelope: MoodHistoryResponse = self.get_json(&self.url("/api/mood/history")).await?;
        Ok(envelope.mood_entries)
    }

    /// Send one chat turn. `session_id` is `None` until the backend has
    /// assigned one.
    pub async fn send_chat_message(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> ApiResult<ChatReply> {
        let request = ChatRequest {
            message,
            session_id,
        };
        let response = self.post_json(&self.url("/api/chat"), &request).await?;
        let response = Self::check_status(response)?;
        let parsed: ChatResponse = response.json()?;
        Ok(parsed.into())
    }

    /// Submit a mood entry. `Ok(false)` means the backend answered with a
    /// non-2xx status.
    pub async fn submit_mood(&self, submission: &MoodSubmission) -> ApiResult<bool> {
        let response = self.post_json(&self.url("/api/mood"), submission).await?;
        if !response.is_success() {
            debug!("mood submission rejected with HTTP {}", response.status);
        }
        Ok(response.is_success())
    }

    /// True when `GET /api/health` answers 2xx.
    pub async fn health_check(&self) -> ApiResult<bool> {
        let url = self.url("/api/health");
        debug!("GET {}", url);
        let response = self.http.get(&url, &Headers::new()).await?;
        Ok(response.is_success())
    }

    /// Fetch emergency contacts and immediate steps.
    pub async fn fetch_crisis_resources(&self) -> ApiResult<CrisisResources> {
        self.get_json(&self.url("/api/crisis-resources")).await
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::models::MoodLevel;
    use crate::traits::HttpError;
    use serde_json::json;

    const BASE: &str = "http://mindwell.test";

    fn client(mock: &MockHttpClient) -> BackendClient {
        BackendClient::with_http_client(BASE, Arc::new(mock.clone()))
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = BackendClient::with_http_client(
            "http://mindwell.test/",
            Arc::new(MockHttpClient::new()),
        );
        assert_eq!(client.base_url, BASE);
    }

    #[test]
    fn test_resources_url_all_has_no_query() {
        let client = client(&MockHttpClient::new());
        assert_eq!(
            client.resources_url(&CategoryFilter::All),
            "http://mindwell.test/api/resources"
        );
        assert_eq!(
            client.resources_url(&CategoryFilter::from("coping-strategies")),
            "http://mindwell.test/api/resources?category=coping-strategies"
        );
        assert_eq!(
            client.resources_url(&CategoryFilter::from("sleep & rest")),
            "http://mindwell.test/api/resources?category=sleep%20%26%20rest"
        );
    }

    #[tokio::test]
    async fn test_fetch_resources_missing_key_is_empty() {
        let mock = MockHttpClient::new();
        mock.set_json(&format!("{}/api/resources", BASE), json!({}));
        let resources = client(&mock).fetch_resources(&CategoryFilter::All).await.unwrap();
        assert!(resources.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_categories_prepends_all() {
        let mock = MockHttpClient::new();
        mock.set_json(
            &format!("{}/api/resources/categories", BASE),
            json!({"categories": ["anxiety", "all", "sleep"]}),
        );
        let categories = client(&mock).fetch_categories().await.unwrap();
        assert_eq!(
            categories,
            vec![
                CategoryFilter::All,
                CategoryFilter::from("anxiety"),
                CategoryFilter::from("sleep"),
            ]
        );
    }

    #[tokio::test]
    async fn test_send_chat_message_body_and_reply() {
        let mock = MockHttpClient::new();
        let url = format!("{}/api/chat", BASE);
        mock.set_json(&url, json!({"session_id": "abc", "response": "Hi there"}));

        let reply = client(&mock).send_chat_message("Hello", None).await.unwrap();
        assert_eq!(reply.session_id, "abc");
        assert_eq!(reply.text, "Hi there");

        let requests = mock.requests_to(&url);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(
            requests[0].json_body(),
            Some(json!({"message": "Hello", "session_id": null}))
        );
    }

    #[tokio::test]
    async fn test_send_chat_message_server_error() {
        let mock = MockHttpClient::new();
        mock.set_status(&format!("{}/api/chat", BASE), 500);
        let err = client(&mock).send_chat_message("Hello", Some("abc")).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_submit_mood_reports_status() {
        let mock = MockHttpClient::new();
        let url = format!("{}/api/mood", BASE);
        let submission = MoodSubmission::new(MoodLevel::new(8), "felt good");

        mock.set_json(&url, json!({"message": "ok"}));
        assert!(client(&mock).submit_mood(&submission).await.unwrap());
        assert_eq!(
            mock.requests_to(&url)[0].json_body(),
            Some(json!({"mood_level": 8, "notes": "felt good", "activities": []}))
        );

        mock.set_status(&url, 422);
        assert!(!client(&mock).submit_mood(&submission).await.unwrap());

        mock.set_error(&url, HttpError::ConnectionFailed("refused".into()));
        assert!(client(&mock).submit_mood(&submission).await.is_err());
    }

    #[tokio::test]
    async fn test_health_check() {
        let mock = MockHttpClient::new();
        let url = format!("{}/api/health", BASE);
        mock.set_json(&url, json!({"status": "healthy"}));
        assert!(client(&mock).health_check().await.unwrap());

        mock.set_status(&url, 503);
        assert!(!client(&mock).health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_decode_error_is_reported() {
        let mock = MockHttpClient::new();
        mock.set_response(
            &format!("{}/api/mood/history", BASE),
            crate::adapters::MockResponse::Success(Response::new(200, "not json")),
        );
        let err = client(&mock).fetch_mood_history().await.unwrap_err();
        assert_eq!(err.error_code(), "E_DECODE");
    }
}
