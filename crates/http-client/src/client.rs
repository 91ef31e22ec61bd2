// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client bound to a base URL with default headers and a timeout

use std::{collections::BTreeMap, time::Duration};

use reqwest::{
    Client, Method, Response,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};
use url::Url;

use crate::{
    body::RequestBody,
    error::{HttpClientError, HttpClientResult},
};

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const JSON_CONTENT_TYPE: &str = "application/json";

/// Settings applied to every request of an [`HttpClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientOptions {
    /// Whole-request timeout
    pub timeout: Duration,
    /// Headers sent with every request
    pub headers: BTreeMap<String, String>,
}

impl Default for HttpClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            headers: BTreeMap::new(),
        }
    }
}

impl HttpClientOptions {
    /// Replace the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add one default header, replacing a previous value for the same name
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Merge default headers
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

/// HTTP client bound to a base URL
///
/// Every request targets `base_url + endpoint`, so endpoints are written with
/// a leading slash. Any response with status 400 or above is turned into
/// [`HttpClientError::Status`] and the response itself is dropped.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpClient {
    /// Build a client for `base_url`
    ///
    /// Fails when the base URL does not parse or a default header is not a
    /// valid header name or value.
    pub fn new(base_url: impl Into<String>, options: HttpClientOptions) -> HttpClientResult<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)?;

        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(header_map(&options.headers)?)
            .build()?;

        Ok(Self {
            client,
            base_url,
            timeout: options.timeout,
        })
    }

    /// Base URL every endpoint is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whole-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `endpoint`; a non-empty body is sent as `application/json`
    pub async fn get(
        &self,
        endpoint: &str,
        body: impl Into<RequestBody>,
    ) -> HttpClientResult<Response> {
        self.send(Method::GET, endpoint, body.into(), JSON_CONTENT_TYPE)
            .await
    }

    /// POST `endpoint`; a non-empty body is sent as `application/json`
    pub async fn post(
        &self,
        endpoint: &str,
        body: impl Into<RequestBody>,
    ) -> HttpClientResult<Response> {
        self.send(Method::POST, endpoint, body.into(), JSON_CONTENT_TYPE)
            .await
    }

    /// PUT `endpoint`; a non-empty body is sent as `application/json`
    pub async fn put(
        &self,
        endpoint: &str,
        body: impl Into<RequestBody>,
    ) -> HttpClientResult<Response> {
        self.send(Method::PUT, endpoint, body.into(), JSON_CONTENT_TYPE)
            .await
    }

    /// DELETE `endpoint`; a non-empty body is sent as `application/json`
    pub async fn delete(
        &self,
        endpoint: &str,
        body: impl Into<RequestBody>,
    ) -> HttpClientResult<Response> {
        self.send(Method::DELETE, endpoint, body.into(), JSON_CONTENT_TYPE)
            .await
    }

    /// POST `value` encoded as JSON
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        value: &T,
    ) -> HttpClientResult<Response> {
        self.post(endpoint, RequestBody::json(value)?).await
    }

    /// PUT `value` encoded as JSON
    pub async fn put_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        value: &T,
    ) -> HttpClientResult<Response> {
        self.put(endpoint, RequestBody::json(value)?).await
    }

    /// POST a raw body; an empty `content_type` sends no `Content-Type`
    pub async fn post_raw(
        &self,
        endpoint: &str,
        raw: impl Into<String>,
        content_type: &str,
    ) -> HttpClientResult<Response> {
        self.send(
            Method::POST,
            endpoint,
            RequestBody::Text(raw.into()),
            content_type,
        )
        .await
    }

    /// PUT a raw body; an empty `content_type` sends no `Content-Type`
    pub async fn put_raw(
        &self,
        endpoint: &str,
        raw: impl Into<String>,
        content_type: &str,
    ) -> HttpClientResult<Response> {
        self.send(
            Method::PUT,
            endpoint,
            RequestBody::Text(raw.into()),
            content_type,
        )
        .await
    }

    /// GET `endpoint` and decode the JSON response
    pub async fn get_json<R: DeserializeOwned>(&self, endpoint: &str) -> HttpClientResult<R> {
        let response = self.get(endpoint, RequestBody::Empty).await?;
        response.json().await.map_err(|e| self.transport_error(e))
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
        content_type: &str,
    ) -> HttpClientResult<Response> {
        let url = Url::parse(&format!("{}{endpoint}", self.base_url))?;
        debug!(%method, %url, "sending request");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(bytes) = body.into_bytes() {
            if !content_type.is_empty() {
                request = request.header(CONTENT_TYPE, content_type);
            }
            request = request.body(bytes);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status.as_u16() < 400 {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%method, %url, status = status.as_u16(), "request failed");
        Err(HttpClientError::Status {
            status: status.as_u16(),
            body,
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            HttpClientError::Timeout(self.timeout)
        } else {
            HttpClientError::Http(error)
        }
    }
}

fn header_map(headers: &BTreeMap<String, String>) -> HttpClientResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| HttpClientError::Header(format!("name {name:?}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| HttpClientError::Header(format!("value for {name}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_ten_seconds_and_no_headers() {
        let options = HttpClientOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert!(options.headers.is_empty());
    }

    #[test]
    fn later_headers_replace_earlier_ones() {
        let options = HttpClientOptions::default()
            .with_header("Authorization", "Bearer old")
            .with_headers([("Authorization", "Bearer new"), ("X-Trace", "1")]);
        assert_eq!(options.headers["Authorization"], "Bearer new");
        assert_eq!(options.headers["X-Trace"], "1");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = HttpClient::new("not a url", HttpClientOptions::default()).unwrap_err();
        assert!(matches!(err, HttpClientError::Url(_)));
    }

    #[test]
    fn invalid_header_is_rejected() {
        let options = HttpClientOptions::default().with_header("bad header", "x");
        let err = HttpClient::new("http://localhost", options).unwrap_err();
        assert!(matches!(err, HttpClientError::Header(_)));

        let options = HttpClientOptions::default().with_header("X-Ok", "line\nbreak");
        let err = HttpClient::new("http://localhost", options).unwrap_err();
        assert_eq!(err.to_string(), "invalid header value for x-ok");
    }

    #[test]
    fn malformed_endpoint_fails_before_sending() {
        let client = HttpClient::new("http://localhost:1", HttpClientOptions::default()).unwrap();
        let err = tokio_test::block_on(client.get("0 bad", ())).unwrap_err();
        assert!(matches!(err, HttpClientError::Url(_)));
    }
}
