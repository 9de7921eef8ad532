//! HTTP client for the CloudHealth API.

use std::time::Duration;

use reqwest::{header, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::Error;

/// Production CloudHealth endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://chapi.cloudhealthtech.com/";

/// Upper bound on every request, connect through body read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// How the credential travels with a request.
///
/// Versioned endpoints (`v1/...`, `v2/...`) take a bearer header; the older
/// unversioned ones only accept an `api_key` query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStyle {
    /// `Authorization: Bearer <key>`.
    Header,
    /// `?api_key=<key>` appended to the query string.
    QueryParam,
}

/// One API call: method, path relative to the endpoint, auth style and an
/// optional JSON body.
#[derive(Debug)]
pub struct Request<'a, B: ?Sized = ()> {
    pub method: Method,
    pub path: String,
    pub auth: AuthStyle,
    pub body: Option<&'a B>,
}

impl Request<'_, ()> {
    pub fn new(method: Method, path: impl Into<String>, auth: AuthStyle) -> Self {
        Self {
            method,
            path: path.into(),
            auth,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>, auth: AuthStyle) -> Self {
        Self::new(Method::GET, path, auth)
    }

    pub fn delete(path: impl Into<String>, auth: AuthStyle) -> Self {
        Self::new(Method::DELETE, path, auth)
    }
}

impl<'a, B: ?Sized> Request<'a, B> {
    /// Attaches a body that is serialized to JSON when the request is built.
    pub fn with_body<C: Serialize + ?Sized>(self, body: &'a C) -> Request<'a, C> {
        Request {
            method: self.method,
            path: self.path,
            auth: self.auth,
            body: Some(body),
        }
    }
}

/// HTTP client for the CloudHealth API.
///
/// Holds the endpoint and credential, both fixed at construction, and a
/// single `reqwest::Client` bounded by a per-request timeout. Cloning is
/// cheap and clones share the connection pool.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    endpoint: Url,
    http: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for `endpoint_url` using [`DEFAULT_TIMEOUT`].
    pub fn new(api_key: impl Into<String>, endpoint_url: &str) -> Result<Self, Error> {
        Self::with_timeout(api_key, endpoint_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom request timeout.
    pub fn with_timeout(
        api_key: impl Into<String>,
        endpoint_url: &str,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let endpoint = parse_endpoint(endpoint_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_key: api_key.into(),
            endpoint,
            http,
        })
    }

    /// The base URL every relative path is resolved against.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn resolve(&self, path: &str) -> Result<Url, Error> {
        let url = self
            .endpoint
            .join(path)
            .map_err(|_| Error::InvalidPath(path.to_string()))?;
        if url.origin() != self.endpoint.origin() || !url.path().starts_with(self.endpoint.path())
        {
            tracing::error!("Path {} escapes endpoint {}", path, self.endpoint);
            return Err(Error::InvalidPath(path.to_string()));
        }
        Ok(url)
    }

    fn bearer(&self) -> String {
        if self.api_key.starts_with("Bearer ") {
            self.api_key.clone()
        } else {
            format!("Bearer {}", self.api_key)
        }
    }

    /// Turns a [`Request`] into an executable HTTP request: resolves the
    /// path, injects the credential and serializes the body.
    pub fn build_request<B>(&self, request: &Request<'_, B>) -> Result<reqwest::Request, Error>
    where
        B: Serialize + ?Sized,
    {
        let mut url = self.resolve(&request.path)?;
        if request.auth == AuthStyle::QueryParam {
            url.query_pairs_mut().append_pair("api_key", &self.api_key);
        }

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .header(header::ACCEPT, "application/json");
        if request.auth == AuthStyle::Header {
            builder = builder.header(header::AUTHORIZATION, self.bearer());
        }
        if let Some(body) = request.body {
            let bytes = serde_json::to_vec(body).map_err(Error::Encode)?;
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(bytes);
        }
        Ok(builder.build()?)
    }

    /// Sends one request, buffers the whole body and classifies the status.
    pub async fn execute<B>(&self, request: &Request<'_, B>) -> Result<Vec<u8>, Error>
    where
        B: Serialize + ?Sized,
    {
        let http_request = self.build_request(request)?;
        tracing::debug!(method = %request.method, path = %request.path, "Sending request");

        let resp = self.http.execute(http_request).await.map_err(|e| {
            tracing::error!("Failed to send {} {}: {}", request.method, request.path, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        classify(status, body.to_vec()).map_err(|e| {
            tracing::warn!(
                "{} {} failed with status {}: {}",
                request.method,
                request.path,
                status,
                e
            );
            e
        })
    }

    pub(crate) async fn get_json<T>(&self, path: String, auth: AuthStyle) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(&Request::get(path, auth)).await?;
        decode(&body)
    }

    pub(crate) async fn create<B, T>(
        &self,
        path: String,
        auth: AuthStyle,
        body: &B,
    ) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = Request::new(Method::POST, path, auth).with_body(body);
        decode(&self.execute(&request).await?)
    }

    pub(crate) async fn update<B, T>(
        &self,
        path: String,
        auth: AuthStyle,
        body: &B,
    ) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = Request::new(Method::PUT, path, auth).with_body(body);
        decode(&self.execute(&request).await?)
    }

    /// 200 and 204 both mean deleted; whatever body came back is ignored.
    pub(crate) async fn delete(&self, path: String, auth: AuthStyle) -> Result<(), Error> {
        self.execute(&Request::delete(path, auth)).await.map(|_| ())
    }
}

fn parse_endpoint(endpoint_url: &str) -> Result<Url, Error> {
    let invalid = |reason: String| Error::InvalidEndpoint {
        url: endpoint_url.to_string(),
        reason,
    };
    let mut url = Url::parse(endpoint_url).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(invalid("not a hierarchical http(s) URL".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Maps a status code to the buffered body or a named error.
pub(crate) fn classify(status: StatusCode, body: Vec<u8>) -> Result<Vec<u8>, Error> {
    match status {
        StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(body),
        StatusCode::BAD_REQUEST => Err(Error::HeaderMissing),
        StatusCode::UNAUTHORIZED => Err(Error::Authentication),
        StatusCode::FORBIDDEN => Err(Error::Forbidden),
        StatusCode::NOT_FOUND => Err(Error::NotFound),
        StatusCode::UNPROCESSABLE_ENTITY => Err(Error::UnprocessableEntity),
        StatusCode::TOO_MANY_REQUESTS => Err(Error::TooManyRequests),
        other => Err(Error::UnknownResponse {
            status: other.as_u16(),
        }),
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|e| {
        let snippet = truncate_body(&String::from_utf8_lossy(body));
        tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
        Error::Decode {
            source: e,
            body: snippet,
        }
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((cut, _)) => format!("{}...[truncated]", &body[..cut]),
    }
}
