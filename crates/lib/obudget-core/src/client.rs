use std::{error::Error, fmt, time::Duration};

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::request::UpstreamRequest;
use crate::search::{SearchType, UnknownSearchType};

/// Public origin of the budget transparency service.
pub const DEFAULT_BASE_URL: &str = "https://next.obudget.org";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("obudget-mcp/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub enum ClientError {
    /// The request could not be sent, timed out, or its body could not be read.
    Transport(Box<reqwest::Error>),
    /// The upstream service answered with a non-success status.
    Status { status: u16, url: String },
    /// The response body was not valid JSON.
    Decode(serde_json::Error),
    InvalidArgument(String),
    InvalidBaseUrl(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) if err.is_timeout() => {
                write!(f, "upstream request timed out: {err}")
            }
            Self::Transport(err) => write!(f, "upstream request failed: {err}"),
            Self::Status { status, url } => {
                write!(f, "upstream returned status {status} for {url}")
            }
            Self::Decode(err) => write!(f, "upstream returned malformed JSON: {err}"),
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::InvalidBaseUrl(message) => write!(f, "invalid base URL: {message}"),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err.as_ref()),
            Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

impl From<UnknownSearchType> for ClientError {
    fn from(err: UnknownSearchType) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Settings for the upstream HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Read-only client for the budget API.
///
/// Cloning is cheap and clones share the underlying connection pool. The
/// client keeps no per-call state: every operation is one GET whose JSON body
/// is returned untouched.
#[derive(Debug, Clone)]
pub struct ObudgetClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ObudgetClient {
    /// Builds a client for the configured base URL.
    ///
    /// # Errors
    /// Returns `ClientError::InvalidBaseUrl` if the URL is not an absolute
    /// http(s) URL, or `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends one request and returns the parsed body.
    ///
    /// # Errors
    /// Returns `ClientError` on transport failure, non-success status, or a
    /// body that is not JSON.
    pub async fn execute(&self, request: &UpstreamRequest) -> ClientResult<Value> {
        let url = self
            .base_url
            .join(&request.path)
            .map_err(|err| ClientError::InvalidBaseUrl(err.to_string()))?;
        debug!(path = %request.path, "sending upstream request");

        let response = match self
            .http
            .get(url.clone())
            .query(&request.params)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(path = %request.path, error = %err, "upstream request failed");
                return Err(err.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(path = %request.path, status = status.as_u16(), "upstream returned error status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Support and grant payments under a budget code prefix.
    ///
    /// # Errors
    /// See [`ObudgetClient::execute`].
    pub async fn get_supports(&self, code: &str) -> ClientResult<Value> {
        self.execute(&UpstreamRequest::supports(code)).await
    }

    /// Contract spending under a budget code prefix.
    ///
    /// # Errors
    /// See [`ObudgetClient::execute`].
    pub async fn get_contract(&self, code: &str) -> ClientResult<Value> {
        self.execute(&UpstreamRequest::contracts(code)).await
    }

    /// Top-level budget structure for the current year.
    ///
    /// # Errors
    /// See [`ObudgetClient::execute`].
    pub async fn get_budget(&self) -> ClientResult<Value> {
        self.execute(&UpstreamRequest::budget()).await
    }

    /// Budget lines under a parent code.
    ///
    /// # Errors
    /// See [`ObudgetClient::execute`].
    pub async fn get_detailed_budget_for_specific_parent(
        &self,
        parent: &str,
    ) -> ClientResult<Value> {
        self.execute(&UpstreamRequest::parent_budget(parent)).await
    }

    /// History series for one budget code.
    ///
    /// # Errors
    /// See [`ObudgetClient::execute`].
    pub async fn get_budget_history_for_code(&self, code: &str) -> ClientResult<Value> {
        self.execute(&UpstreamRequest::budget_history(code)).await
    }

    /// Free-text search in one category.
    ///
    /// # Errors
    /// Returns `ClientError::InvalidArgument` for an unknown category before any
    /// request is sent; otherwise see [`ObudgetClient::execute`].
    pub async fn search(&self, term: &str, search_type: &str) -> ClientResult<Value> {
        let search_type: SearchType = search_type.parse()?;
        self.search_in(term, search_type).await
    }

    /// Free-text search in an already validated category.
    ///
    /// # Errors
    /// See [`ObudgetClient::execute`].
    pub async fn search_in(&self, term: &str, search_type: SearchType) -> ClientResult<Value> {
        self.execute(&UpstreamRequest::search(term, search_type)).await
    }
}

fn normalize_base_url(raw: &str) -> ClientResult<Url> {
    let mut url =
        Url::parse(raw.trim()).map_err(|err| ClientError::InvalidBaseUrl(format!("{raw}: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ClientError::InvalidBaseUrl(format!(
            "{raw}: expected an http or https URL"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let url = normalize_base_url("https://next.obudget.org").unwrap();
        assert_eq!(url.join("api/query").unwrap().as_str(), "https://next.obudget.org/api/query");
    }

    #[test]
    fn base_url_keeps_path_prefix() {
        let url = normalize_base_url("http://localhost:8080/proxy").unwrap();
        assert_eq!(
            url.join("search/tenders").unwrap().as_str(),
            "http://localhost:8080/proxy/search/tenders"
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        assert!(matches!(
            normalize_base_url("ftp://next.obudget.org"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            normalize_base_url("next.obudget.org"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn unknown_search_type_fails_before_sending() {
        // Port 9 is never contacted: validation happens first.
        let client = ObudgetClient::new(&ClientConfig::new("http://127.0.0.1:9")).unwrap();
        let err = client.search("hospital", "hospitals").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }
}
