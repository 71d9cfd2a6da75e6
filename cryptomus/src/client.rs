//! The Cryptomus API client and its request dispatcher.
//!
//! [`Cryptomus`] holds the merchant credentials and a shared `reqwest`
//! client. Every named endpoint (see [`crate::endpoints`]) funnels into
//! [`Cryptomus::request`], which:
//!
//! - serializes the payload once
//! - signs exactly those bytes (`Sign` header)
//! - sends them as the body, or as query parameters for `GET`
//! - maps every failure into [`CryptomusError`]
//!
//! One attempt is made per call. There is no retry and no default timeout.

use std::time::Duration;

use http::Method;
use http::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

use crate::config::CryptomusConfig;
use crate::constants::{DEFAULT_BASE_URL, MERCHANT_HEADER, SIGN_HEADER};
use crate::error::CryptomusError;
use crate::signature;

/// Async client for the Cryptomus payment API.
///
/// Cheap to clone; clones share the underlying connection pool. Credentials
/// are immutable for the lifetime of the client.
///
/// # Example
///
/// ```no_run
/// use cryptomus::{CreatePaymentRequest, Cryptomus};
///
/// # async fn run() -> Result<(), cryptomus::CryptomusError> {
/// let client = Cryptomus::new("merchant-uuid", "payment-token");
/// let invoice = client
///     .create_payment(&CreatePaymentRequest::new("10", "USDT", "order-1"))
///     .await?;
/// println!("{}", invoice.result.uuid);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Cryptomus {
    /// Merchant identifier sent with every request
    merchant: String,
    /// Signing secret, never sent over the wire
    payment_token: String,
    /// Base URL, always ending with a single `/`
    base_url: String,
    /// Shared Reqwest HTTP client
    client: Client,
    /// Optional request timeout
    timeout: Option<Duration>,
}

impl Cryptomus {
    /// Creates a client for the production API.
    #[must_use]
    pub fn new(merchant: impl Into<String>, payment_token: impl Into<String>) -> Self {
        Self {
            merchant: merchant.into(),
            payment_token: payment_token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            client: Client::new(),
            timeout: None,
        }
    }

    /// Creates a client from a [`CryptomusConfig`].
    #[must_use]
    pub fn from_config(config: CryptomusConfig) -> Self {
        let client =
            Self::new(config.merchant, config.payment_token).with_base_url(config.base_url);
        match config.timeout {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        }
    }

    /// Creates a client from `CRYPTOMUS_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`CryptomusConfig::from_env`].
    pub fn from_env() -> Result<Self, CryptomusError> {
        CryptomusConfig::from_env().map(Self::from_config)
    }

    /// Points the client at another base URL (e.g., a mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&base_url.into());
        self
    }

    /// Sets a timeout for all future requests.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the underlying HTTP client.
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the merchant identifier.
    #[must_use]
    pub fn merchant(&self) -> &str {
        &self.merchant
    }

    /// Returns the base URL used by this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Signs `payload` with this client's payment token.
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError::Serialization`] if `payload` cannot be encoded.
    pub fn sign<T>(&self, payload: &T) -> Result<String, CryptomusError>
    where
        T: Serialize + ?Sized,
    {
        signature::make_signature(payload, &self.payment_token)
    }

    /// Verifies the `sign` field of a webhook payload against this client's
    /// payment token. `payload` is left untouched.
    #[must_use]
    pub fn verify_signature(&self, payload: &Value) -> bool {
        signature::verify_signature(payload, &self.payment_token)
    }

    /// Verifies a raw webhook body. Malformed JSON yields `false`.
    #[must_use]
    pub fn verify_webhook(&self, body: &[u8]) -> bool {
        signature::verify_signature_bytes(body, &self.payment_token)
    }

    /// Sends a signed request to `route` and decodes the JSON response.
    ///
    /// For `GET` the payload becomes query parameters: strings are sent as
    /// is, every other value as its JSON text. Other methods send the JSON
    /// body. The `Sign` header always covers the JSON serialization of
    /// `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the URL, payload or headers cannot be
    /// built, if the transport fails, if the gateway answers with a
    /// non-success status, or if the body does not decode into `R`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "cryptomus.request",
            skip_all,
            fields(
                http.method = %method,
                http.route = route,
                otel.status_code = tracing::field::Empty,
                error.message = tracing::field::Empty
            )
        )
    )]
    pub async fn request<T, R>(
        &self,
        method: Method,
        route: &str,
        payload: &T,
    ) -> Result<R, CryptomusError>
    where
        T: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let result = self.dispatch(method, route, payload).await;
        record_result_on_span(&result);
        result
    }

    async fn dispatch<T, R>(
        &self,
        method: Method,
        route: &str,
        payload: &T,
    ) -> Result<R, CryptomusError>
    where
        T: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let context = format!("{method} {route}");
        let mut url = self.endpoint(route, &context)?;
        let body = serde_json::to_vec(payload).map_err(|e| CryptomusError::Serialization {
            context: context.clone(),
            source: e,
        })?;
        let headers = self.auth_headers(&body, &context)?;

        let mut req = if method == Method::GET {
            let fields: Value =
                serde_json::from_slice(&body).map_err(|e| CryptomusError::Serialization {
                    context: context.clone(),
                    source: e,
                })?;
            append_query(&mut url, &fields);
            self.client.request(method, url).headers(headers)
        } else {
            self.client.request(method, url).headers(headers).body(body)
        };
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let http_response = req.send().await.map_err(|e| CryptomusError::Http {
            context: context.clone(),
            source: e,
        })?;
        let status = http_response.status();
        let bytes = http_response
            .bytes()
            .await
            .map_err(|e| CryptomusError::ResponseBodyRead {
                context: context.clone(),
                source: e,
            })?;

        if !status.is_success() {
            return Err(CryptomusError::HttpStatus {
                context,
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| CryptomusError::JsonDeserialization { context, source: e })
    }

    /// Joins `route` onto the base URL.
    fn endpoint(&self, route: &str, context: &str) -> Result<Url, CryptomusError> {
        let raw = format!("{}{}", self.base_url, route.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| CryptomusError::UrlParse {
            context: context.to_owned(),
            source: e,
        })
    }

    /// Builds `Content-Type`, `Merchant` and `Sign` for a serialized body.
    fn auth_headers(&self, body: &[u8], context: &str) -> Result<HeaderMap, CryptomusError> {
        let invalid = |e| CryptomusError::InvalidHeader {
            context: context.to_owned(),
            source: e,
        };
        let sign = signature::sign_json(body, &self.payment_token);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            MERCHANT_HEADER,
            HeaderValue::from_str(&self.merchant).map_err(invalid)?,
        );
        headers.insert(SIGN_HEADER, HeaderValue::from_str(&sign).map_err(invalid)?);
        Ok(headers)
    }
}

impl std::fmt::Debug for Cryptomus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cryptomus")
            .field("merchant", &self.merchant)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Strips trailing slashes and adds exactly one.
fn normalize_base_url(value: &str) -> String {
    let mut normalized = value.trim_end_matches('/').to_owned();
    normalized.push('/');
    normalized
}

/// Flattens the top-level fields of `payload` into query parameters.
fn append_query(url: &mut Url, payload: &Value) {
    let Some(fields) = payload.as_object() else {
        return;
    };
    if fields.is_empty() {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    for (key, value) in fields {
        if let Value::String(text) = value {
            pairs.append_pair(key, text);
        } else {
            pairs.append_pair(key, &value.to_string());
        }
    }
}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R>(result: &Result<R, CryptomusError>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "Request to Cryptomus failed");
        }
    }
}

/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
const fn record_result_on_span<R>(_result: &Result<R, CryptomusError>) {}
