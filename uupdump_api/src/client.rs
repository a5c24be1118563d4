//! HTTP client for the UUP Dump API.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    errors::describe,
    params::Params,
    query::{
        FetchUpdateQuery, GetFilesQuery, ListEditionsQuery, ListIdQuery, ListLangsQuery, Query,
        UpdateInfoQuery,
    },
    Error,
};

/// HTTP client for the UUP Dump API.
///
/// Holds only its configuration. Each request builds a fresh
/// `reqwest::Client` with the resolved timeout, so calls share no state and a
/// `Client` can be cloned or shared between tasks freely.
#[derive(Clone, Debug)]
pub struct Client {
    config: ClientConfig,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production UUP Dump API.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        tracing::info!(
            "Initialized UUP Dump API client (base_url={}, timeout={}s)",
            config.base_url,
            config.timeout.as_secs_f64()
        );
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get_url(&self, path: &str, params: &Params) -> Result<Url, Error> {
        let joined = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let url = Url::parse(&joined).map_err(|e| {
            tracing::error!("Invalid URL constructed from {:?}: {}", joined, e);
            Error::api(format!("Request failed: invalid URL {:?}: {}", joined, e))
                .with_detail(e.to_string())
        })?;
        Ok(params.add_to_url(&url))
    }

    /// Sends one GET request to `path` and classifies the outcome.
    ///
    /// `timeout` overrides the configured timeout for this call only. There
    /// are no retries.
    ///
    /// # Errors
    ///
    /// - [`Error::Timeout`] if the request does not finish in time.
    /// - [`Error::Connection`] if the service cannot be reached.
    /// - [`Error::Http`] on a non-2xx status.
    /// - [`Error::Response`] if the body is not JSON, or carries an `"error"`
    ///   field at the top level or inside its `"response"` object.
    /// - [`Error::Api`] for any other transport failure.
    pub async fn execute(
        &self,
        path: &str,
        params: &Params,
        timeout: Option<Duration>,
    ) -> Result<Value, Error> {
        let timeout = timeout.unwrap_or(self.config.timeout);
        tracing::info!("Calling UUP Dump API {} ({})", path, params);
        tracing::debug!(path, ?params, timeout = timeout.as_secs_f64(), "Request parameters");

        let url = self.get_url(path, params)?;
        let client = reqwest::Client::builder()
            .user_agent(self.config.user_agent.as_str())
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::api(format!("Request failed: {}", e)).with_detail(error_chain(&e))
            })?;

        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| classify_transport_error(path, timeout, e))?;

        let status = resp.status();
        tracing::debug!(path, status = status.as_u16(), "Response status");

        if !status.is_success() {
            let body = match resp.text().await {
                Ok(body) => Some(body),
                Err(e) => {
                    tracing::warn!("Failed to read error body from {}: {}", path, e);
                    None
                }
            };
            let err = Error::http(
                format!("HTTP {} error for {}", status.as_u16(), path),
                status.as_u16(),
                body.as_deref(),
            );
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                err.response_body().unwrap_or_default()
            );
            return Err(err);
        }

        let body = resp
            .text()
            .await
            .map_err(|e| classify_transport_error(path, timeout, e))?;

        let data = serde_json::from_str::<Value>(&body).map_err(|e| {
            tracing::error!("Failed to parse JSON response from {}: {}", path, e);
            Error::response(format!("Invalid JSON response from API: {}", e), None, None)
                .with_detail(body.as_str())
        })?;

        if let Some(code) = embedded_error_code(&data) {
            let message = describe(&code);
            tracing::error!("API returned error: {} - {}", code, message);
            return Err(Error::response(message, Some(code), Some(data)));
        }

        tracing::debug!(path, status = status.as_u16(), "Request successful");
        Ok(data)
    }

    /// Runs a query builder against its endpoint with the configured timeout.
    pub async fn query<Q: Query>(&self, query: &Q) -> Result<Value, Error> {
        self.execute(Q::PATH, &query.to_params(), None).await
    }

    /// Lists builds in the fileinfo database (`listid.php`).
    pub async fn list_updates(&self, query: &ListIdQuery) -> Result<Value, Error> {
        self.query(query).await
    }

    /// Fetches the latest build of a channel from Windows Update (`fetchupd.php`).
    pub async fn fetch_update(&self, query: &FetchUpdateQuery) -> Result<Value, Error> {
        self.query(query).await
    }

    /// Fetches the file list of an update (`get.php`).
    pub async fn get_files(&self, query: &GetFilesQuery) -> Result<Value, Error> {
        self.query(query).await
    }

    /// Lists languages available for an update (`listlangs.php`).
    pub async fn list_languages(&self, query: &ListLangsQuery) -> Result<Value, Error> {
        self.query(query).await
    }

    /// Lists editions available for a language (`listeditions.php`).
    pub async fn list_editions(&self, query: &ListEditionsQuery) -> Result<Value, Error> {
        self.query(query).await
    }

    /// Fetches the stored details of an update (`updateinfo.php`).
    pub async fn update_info(&self, query: &UpdateInfoQuery) -> Result<Value, Error> {
        self.query(query).await
    }

    /// Fetches the API version (`api_version.php`).
    pub async fn api_version(&self) -> Result<Value, Error> {
        self.execute("api_version.php", &Params::new(), None).await
    }
}

fn classify_transport_error(path: &str, timeout: Duration, e: reqwest::Error) -> Error {
    let detail = error_chain(&e);
    if e.is_timeout() {
        tracing::error!("Request timed out after {}s: {}", timeout.as_secs_f64(), path);
        Error::timeout(format!(
            "Request to {} timed out after {} seconds",
            path,
            timeout.as_secs_f64()
        ))
        .with_detail(detail)
    } else if is_connection_failure(&e) {
        tracing::error!("Connection error: {}", detail);
        Error::connection(format!("Failed to connect to UUP Dump API: {}", detail))
            .with_detail(detail)
    } else {
        tracing::error!("Request error: {}", detail);
        Error::api(format!("Request failed: {}", detail)).with_detail(detail)
    }
}

fn is_connection_failure(e: &reqwest::Error) -> bool {
    use std::io::ErrorKind;

    if e.is_connect() {
        return true;
    }
    let mut source = std::error::Error::source(e);
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                ErrorKind::ConnectionRefused
                    | ErrorKind::ConnectionReset
                    | ErrorKind::ConnectionAborted
                    | ErrorKind::NotConnected
                    | ErrorKind::BrokenPipe
                    | ErrorKind::UnexpectedEof
            ) {
                return true;
            }
        }
        source = err.source();
    }
    false
}

/// Joins an error and its sources into one line.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut text = e.to_string();
    let mut source = e.source();
    while let Some(err) = source {
        let part = err.to_string();
        if !text.contains(&part) {
            text.push_str(": ");
            text.push_str(&part);
        }
        source = err.source();
    }
    text
}

/// The application error code of a body, if any. The service puts it under
/// `response.error`; a top-level `error` is accepted too.
fn embedded_error_code(data: &Value) -> Option<String> {
    [
        data.get("error"),
        data.get("response").and_then(|r| r.get("error")),
    ]
    .into_iter()
    .flatten()
    .find_map(|field| match field {
        Value::String(code) => Some(code.clone()),
        Value::Number(code) => Some(code.to_string()),
        _ => None,
    })
}
