//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{HistoryEntry, SendAck, SmsRequest};

const HISTORY_PATH: &str = "api/history";
const SEND_PATH: &str = "api/sms/send";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ApiClient`].
///
/// Form validation failures never appear here: they are handled entirely in
/// the send form before a request object exists.
pub enum ApiError {
    /// The configured base URL could not be parsed.
    #[error("invalid base url: {input}")]
    BaseUrl { input: String },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("decode error: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Clone)]
/// Builder for [`ApiClient`].
///
/// Use this when you need to customize the timeout or user-agent.
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Create a builder with no timeout/user-agent override.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`ApiClient`].
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let (history_url, send_url) = endpoint_urls(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ApiError::Transport(Box::new(err)))?;

        Ok(ApiClient {
            history_url,
            send_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// HTTP client for the SMS backend.
///
/// This type owns the two endpoint URLs derived from the configured base URL:
/// - `GET {base}/api/history`
/// - `POST {base}/api/sms/send`
///
/// Neither call retries; the history poller simply fetches again on the next
/// tick, and the send form leaves the draft populated for a manual retry.
pub struct ApiClient {
    history_url: String,
    send_url: String,
    http: Arc<dyn HttpTransport>,
}

impl ApiClient {
    /// Create a client for the given base URL with default HTTP settings.
    ///
    /// For more customization, use [`ApiClient::builder`].
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Fetch the full send history.
    ///
    /// Errors:
    /// - [`ApiError::Transport`] when the exchange could not complete,
    /// - [`ApiError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`ApiError::Decode`] when the body is not the expected JSON array.
    pub async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let response = self
            .http
            .get(&self.history_url)
            .await
            .map_err(ApiError::Transport)?;

        if !(200..=299).contains(&response.status) {
            return Err(http_status_error(response));
        }

        let entries = crate::transport::decode_history_json(&response.body)
            .map_err(|err| ApiError::Decode(Box::new(err)))?;
        tracing::debug!(url = %self.history_url, entries = entries.len(), "fetched sms history");
        Ok(entries)
    }

    /// Submit an SMS request.
    ///
    /// The acknowledgement body is decoded but not interpreted; a returned
    /// [`SendAck`] means the backend accepted the exchange, nothing more.
    pub async fn send_sms(&self, request: &SmsRequest) -> Result<SendAck, ApiError> {
        let body = crate::transport::encode_send_sms_json(request);
        tracing::debug!(
            url = %self.send_url,
            account_id = request.account_id().as_str(),
            "submitting sms"
        );

        let response = self
            .http
            .post_json(&self.send_url, body)
            .await
            .map_err(ApiError::Transport)?;

        if !(200..=299).contains(&response.status) {
            return Err(http_status_error(response));
        }

        crate::transport::decode_send_ack_json(&response.body)
            .map_err(|err| ApiError::Decode(Box::new(err)))
    }
}

fn http_status_error(response: HttpResponse) -> ApiError {
    let body = if response.body.trim().is_empty() {
        None
    } else {
        Some(response.body)
    };
    ApiError::HttpStatus {
        status: response.status,
        body,
    }
}

fn endpoint_urls(base_url: &str) -> Result<(String, String), ApiError> {
    let invalid = || ApiError::BaseUrl {
        input: base_url.to_owned(),
    };

    let mut base = Url::parse(base_url.trim()).map_err(|_| invalid())?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let history = base.join(HISTORY_PATH).map_err(|_| invalid())?;
    let send = base.join(SEND_PATH).map_err(|_| invalid())?;
    Ok((history.into(), send.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{AccountId, KnownSendStatus, MessageText, PhoneNumber};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Method {
        Get,
        PostJson,
    }

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_method: Option<Method>,
        last_url: Option<String>,
        last_body: Option<String>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_method: None,
                    last_url: None,
                    last_body: None,
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn last_request(&self) -> (Option<Method>, Option<String>, Option<String>) {
            let state = self.state.lock().unwrap();
            (
                state.last_method,
                state.last_url.clone(),
                state.last_body.clone(),
            )
        }
    }

    impl HttpTransport for FakeTransport {
        fn get<'a>(
            &'a self,
            url: &'a str,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.last_method = Some(Method::Get);
                    state.last_url = Some(url.to_owned());
                    state.last_body = None;
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse { status, body })
            })
        }

        fn post_json<'a>(
            &'a self,
            url: &'a str,
            body: String,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, response_body) = {
                    let mut state = self.state.lock().unwrap();
                    state.last_method = Some(Method::PostJson);
                    state.last_url = Some(url.to_owned());
                    state.last_body = Some(body);
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse {
                    status,
                    body: response_body,
                })
            })
        }
    }

    fn make_client(transport: FakeTransport) -> ApiClient {
        ApiClient {
            history_url: "https://example.invalid/api/history".to_owned(),
            send_url: "https://example.invalid/api/sms/send".to_owned(),
            http: Arc::new(transport),
        }
    }

    fn sample_request() -> SmsRequest {
        SmsRequest::new(
            AccountId::new("acct-1").unwrap(),
            PhoneNumber::new("5551234567").unwrap(),
            MessageText::new("hello").unwrap(),
        )
    }

    #[tokio::test]
    async fn fetch_history_issues_get_and_parses_entries() {
        let json = r#"
        [
          {
            "smsRequest": {
              "accountId": "acct-1",
              "phoneNumber": "5551234567",
              "message": "hello"
            },
            "date": "2024-01-02T03:04:05Z",
            "status": "success"
          }
        ]
        "#;

        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let entries = client.fetch_history().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].account_id, "acct-1");
        assert_eq!(entries[0].status.known(), Some(KnownSendStatus::Success));

        let (method, url, body) = transport.last_request();
        assert_eq!(method, Some(Method::Get));
        assert_eq!(url.as_deref(), Some("https://example.invalid/api/history"));
        assert_eq!(body, None);
    }

    #[tokio::test]
    async fn fetch_history_maps_non_success_http_status() {
        let transport = FakeTransport::new(500, "oops");
        let client = make_client(transport);

        let err = client.fetch_history().await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn fetch_history_maps_empty_http_body_to_none() {
        let transport = FakeTransport::new(503, "   ");
        let client = make_client(transport);

        let err = client.fetch_history().await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn fetch_history_maps_invalid_json_to_decode_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport);

        let err = client.fetch_history().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn send_sms_posts_json_encoded_request() {
        let transport = FakeTransport::new(200, r#"{"ok": true}"#);
        let client = make_client(transport.clone());

        let ack = client.send_sms(&sample_request()).await.unwrap();
        assert_eq!(ack.raw, serde_json::json!({"ok": true}));

        let (method, url, body) = transport.last_request();
        assert_eq!(method, Some(Method::PostJson));
        assert_eq!(url.as_deref(), Some("https://example.invalid/api/sms/send"));

        let body: serde_json::Value = serde_json::from_str(&body.unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "accountId": "acct-1",
                "phoneNumber": "5551234567",
                "message": "hello"
            })
        );
    }

    #[tokio::test]
    async fn send_sms_maps_non_success_http_status() {
        let transport = FakeTransport::new(400, "bad request");
        let client = make_client(transport);

        let err = client.send_sms(&sample_request()).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::HttpStatus {
                status: 400,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn send_sms_maps_invalid_ack_to_decode_error() {
        let transport = FakeTransport::new(200, "");
        let client = make_client(transport);

        let err = client.send_sms(&sample_request()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn endpoint_urls_join_with_and_without_trailing_slash() {
        let (history, send) = endpoint_urls("http://localhost:8000").unwrap();
        assert_eq!(history, "http://localhost:8000/api/history");
        assert_eq!(send, "http://localhost:8000/api/sms/send");

        let (history, _) = endpoint_urls("http://localhost:8000/").unwrap();
        assert_eq!(history, "http://localhost:8000/api/history");

        let (history, send) = endpoint_urls("https://sms.example.com/console").unwrap();
        assert_eq!(history, "https://sms.example.com/console/api/history");
        assert_eq!(send, "https://sms.example.com/console/api/sms/send");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::BaseUrl { .. })
        ));
        assert!(matches!(ApiClient::new(""), Err(ApiError::BaseUrl { .. })));
    }
}
