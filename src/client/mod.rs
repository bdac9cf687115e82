// STOR Rust SDK for the STOR Object Storage Service
// Copyright 2025 STOR Rust SDK Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! STOR client to perform bucket, object, multipart, archive and nonce operations.
//!
//! # HTTP Version Support
//!
//! The client supports both HTTP/1.1 and HTTP/2. When connecting over TLS the
//! client negotiates HTTP/2 via ALPN if the server supports it, otherwise it
//! falls back to HTTP/1.1.
//!
//! HTTP/2 support is enabled by default via the `http2` feature flag:
//!
//! ```toml
//! [dependencies]
//! stor = { version = "0.1", default-features = false, features = ["default-tls"] }
//! ```

use http::StatusCode;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::creds::{Provider, StaticProvider};
use crate::error::{ConfigErr, Error, IoError, NetworkError, ServerError, ValidationErr};
use crate::error_response::map_error_response;
use crate::header_constants::*;
use crate::http::BaseUrl;
use crate::types::StorRequest;

mod abort_archive;
mod abort_multipart_upload;
mod add_archive_entries;
mod complete_archive;
mod complete_multipart_upload;
mod create_archive;
mod create_bucket;
mod create_multipart_upload;
mod create_nonce;
mod delete_bucket;
mod delete_objects;
mod get_archive;
mod get_object;
mod list_buckets;
mod list_objects;
mod put_object;
mod upload_part;

/// Timeout applied to every call unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the service URL, read by [`StorClientBuilder::from_env`].
pub const ENV_HOST: &str = "STOR_HOST";
/// Environment variable holding the API key, read by [`StorClientBuilder::from_env`].
pub const ENV_API_KEY: &str = "STOR_API_KEY";
/// Environment variable holding the timeout in whole seconds, read by [`StorClientBuilder::from_env`].
pub const ENV_TIMEOUT_SECS: &str = "STOR_TIMEOUT_SECS";

/// Configuration for the HTTP connection pool.
///
/// # Example
///
/// ```
/// use stor::client::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(64)
///     .idle_timeout(Duration::from_secs(120));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host. Default: 32
    pub max_idle_per_host: usize,

    /// How long idle connections are kept in the pool. Default: 90 seconds
    pub idle_timeout: Duration,

    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: Duration,

    /// Enable TCP_NODELAY (disable Nagle's algorithm). Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: Duration::from_secs(90),
            tcp_keepalive: Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

/// Client Builder manufactures a [`StorClient`] using given parameters.
///
/// A host and an API key are both required. [`validate`](Self::validate) reports the
/// first problem found and keeps reporting it on later calls.
#[derive(Debug, Default)]
pub struct StorClientBuilder {
    base_url: Option<BaseUrl>,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    /// `None` means [`DEFAULT_TIMEOUT`]; zero disables the timeout.
    timeout: Option<Duration>,
    /// Transport to use instead of constructing a new one.
    http_client: Option<reqwest::Client>,
    /// Set file for loading CAs certs to trust. This is in addition to the system trust store. The file must contain PEM encoded certificates.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
    connection_pool_config: ConnectionPoolConfig,
    validation_err: OnceCell<ConfigErr>,
}

impl StorClientBuilder {
    /// Creates a builder given the base URL of the STOR service.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url: Some(base_url),
            ..Default::default()
        }
    }

    /// Creates a builder from the `STOR_HOST`, `STOR_API_KEY` and `STOR_TIMEOUT_SECS`
    /// environment variables. Unset variables leave the setting empty, so a missing host
    /// or key is reported by [`validate`](Self::validate).
    pub fn from_env() -> Result<Self, ConfigErr> {
        let mut builder = Self::default();
        if let Ok(host) = std::env::var(ENV_HOST)
            && !host.is_empty()
        {
            builder = builder.host(host.parse()?);
        }
        if let Ok(api_key) = std::env::var(ENV_API_KEY)
            && !api_key.is_empty()
        {
            builder = builder.api_key(&api_key);
        }
        if let Ok(secs) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e| ConfigErr::InvalidTimeout(format!("{ENV_TIMEOUT_SECS}={secs}: {e}")))?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder)
    }

    /// Set the base URL of the STOR service.
    pub fn host(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Set the API key sent as a bearer token with every request.
    pub fn api_key(self, api_key: &str) -> Self {
        self.provider(Some(StaticProvider::new(api_key)))
    }

    /// Set the credential provider.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set the timeout applied to each call. [`Duration::ZERO`] disables the timeout.
    ///
    /// Buffered calls are bounded from connect until the body is read. For
    /// [`get_object`](StorClient::get_object) the timeout ends once headers arrive.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use the given HTTP client instead of constructing one. TLS, pool and user agent
    /// settings of this builder are then ignored.
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CAs certs to trust. This is in addition to the system
    /// trust store. The file must contain PEM encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Configure the HTTP connection pool settings.
    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Checks that a host and an API key are configured.
    ///
    /// Returns the first error found. Once validation failed, the same error is
    /// returned by every later call.
    pub fn validate(&self) -> Result<(), ConfigErr> {
        if let Some(err) = self.validation_err.get() {
            return Err(err.clone());
        }
        let result = self.check();
        if let Err(err) = &result {
            let _ = self.validation_err.set(err.clone());
        }
        result
    }

    fn check(&self) -> Result<(), ConfigErr> {
        if self.base_url.is_none() {
            return Err(ConfigErr::MissingHost);
        }
        match &self.provider {
            Some(p) if !p.fetch().api_key.is_empty() => Ok(()),
            _ => Err(ConfigErr::MissingApiKey),
        }
    }

    fn build_http_client(&self) -> Result<reqwest::Client, Error> {
        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        #[cfg(feature = "http2")]
        {
            builder = builder.http2_adaptive_window(true);
        }

        let mut user_agent = String::from("STOR (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") stor-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = &self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = &self.ssl_cert_file {
            let mut buf = Vec::new();
            let mut file = File::open(v).map_err(IoError::IOError)?;
            file.read_to_end(&mut buf).map_err(IoError::IOError)?;

            let certs = reqwest::Certificate::from_pem_bundle(&buf)
                .map_err(ValidationErr::InvalidCertificate)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        Ok(builder.build().map_err(ValidationErr::HttpClient)?)
    }

    /// Build the Client.
    pub fn build(self) -> Result<StorClient, Error> {
        self.validate()?;
        let http_client = match &self.http_client {
            Some(c) => c.clone(),
            None => self.build_http_client()?,
        };
        let base_url = self.base_url.ok_or(ConfigErr::MissingHost)?;
        let provider = self.provider.ok_or(ConfigErr::MissingApiKey)?;
        let timeout = match self.timeout.unwrap_or(DEFAULT_TIMEOUT) {
            t if t.is_zero() => None,
            t => Some(t),
        };

        Ok(StorClient {
            http_client,
            shared: Arc::new(SharedClientItems {
                base_url,
                provider,
                timeout,
            }),
        })
    }
}

/// Client for the STOR object storage service.
///
/// Cheap to clone; clones share the connection pool and configuration, which are
/// immutable once built.
#[derive(Clone, Debug)]
pub struct StorClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl StorClient {
    /// Returns a client for the given base URL and API key with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use stor::client::StorClient;
    /// use stor::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://stor.example.com".parse().unwrap();
    /// let client = StorClient::new(base_url, "my-api-key").unwrap();
    /// ```
    pub fn new(base_url: BaseUrl, api_key: &str) -> Result<Self, Error> {
        StorClientBuilder::new(base_url).api_key(api_key).build()
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Returns whether this client is configured to use HTTPS.
    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    /// The per-call timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        self.shared.timeout
    }

    /// Sends one request and checks its status.
    ///
    /// Returns the response when the status equals the expected status. Otherwise the
    /// outcome is, in order: the request's "not found" error for a 404, the domain error
    /// mapped from the body, or a generic status error carrying the body.
    pub(crate) async fn execute(&self, request: &mut StorRequest) -> Result<reqwest::Response, Error> {
        let url = self.shared.base_url.build_url(
            &request.query_params,
            request.bucket.as_deref(),
            request.object.as_deref(),
        );
        let creds = self.shared.provider.fetch();

        let mut req = self
            .http_client
            .request(request.method.clone(), url.to_string())
            .header(AUTHORIZATION, format!("Bearer {}", creds.api_key));

        if let Some(content_type) = &request.content_type {
            req = req.header(CONTENT_TYPE, content_type.as_str());
        }
        for (key, values) in request.headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }

        if let Some(content) = request.body.take() {
            let (body, size) = content.into_body().await?;
            // in-memory bodies carry their own length
            if body.as_bytes().is_none()
                && let Some(len) = request.content_length.or(size.value())
            {
                req = req.header(CONTENT_LENGTH, len.to_string());
            }
            req = req.body(body);
        }

        let resp = match self.shared.timeout {
            Some(t) if request.streaming => async_std::future::timeout(t, req.send())
                .await
                .map_err(|_| NetworkError::Timeout)?,
            Some(t) => req.timeout(t).send().await,
            None => req.send().await,
        };
        let resp = resp.map_err(NetworkError::from)?;

        let status = resp.status();
        log::debug!("{} {} -> {status}", request.method, url.path);
        if status == request.expected_status {
            return Ok(resp);
        }

        if status == StatusCode::NOT_FOUND
            && let Some(err) = request.not_found.clone()
        {
            return Err(err.into());
        }

        let body = resp.bytes().await.map_err(NetworkError::from)?;
        // streamed reads only distinguish a missing object
        if !request.streaming
            && let Some(err) = map_error_response(&body)
        {
            return Err(err.into());
        }
        Err(ServerError::HttpError(status.as_u16(), String::from_utf8_lossy(&body).into_owned()).into())
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) provider: Arc<dyn Provider + Send + Sync + 'static>,
    pub(crate) timeout: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> BaseUrl {
        "http://127.0.0.1:9000".parse().unwrap()
    }

    #[test]
    fn test_missing_host_is_reported_first() {
        let builder = StorClientBuilder::default();
        assert_eq!(builder.validate(), Err(ConfigErr::MissingHost));
        assert!(matches!(
            StorClientBuilder::default().api_key("key").build(),
            Err(Error::Validation(ValidationErr::Config(ConfigErr::MissingHost)))
        ));
    }

    #[test]
    fn test_missing_api_key() {
        let builder = StorClientBuilder::new(base_url());
        assert_eq!(builder.validate(), Err(ConfigErr::MissingApiKey));

        let builder = StorClientBuilder::new(base_url()).api_key("");
        assert_eq!(builder.validate(), Err(ConfigErr::MissingApiKey));
    }

    #[test]
    fn test_first_validation_error_is_cached() {
        let builder = StorClientBuilder::default();
        assert_eq!(builder.validate(), Err(ConfigErr::MissingHost));

        // fixing the configuration afterwards does not clear the recorded error
        let builder = builder.host(base_url()).api_key("key");
        assert_eq!(builder.validate(), Err(ConfigErr::MissingHost));
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_successful_validation_is_not_cached() {
        let builder = StorClientBuilder::new(base_url()).api_key("key");
        assert_eq!(builder.validate(), Ok(()));
        assert_eq!(builder.validate(), Ok(()));
    }

    #[test]
    fn test_timeout_defaults_and_zero_disables() {
        let client = StorClient::new(base_url(), "key").unwrap();
        assert_eq!(client.timeout(), Some(DEFAULT_TIMEOUT));
        assert!(!client.is_secure());

        let client = StorClientBuilder::new(base_url())
            .api_key("key")
            .timeout(Duration::ZERO)
            .build()
            .unwrap();
        assert_eq!(client.timeout(), None);
    }

    #[test]
    fn test_injected_http_client_is_used() {
        let client = StorClientBuilder::new(base_url())
            .api_key("key")
            .http_client(reqwest::Client::new())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(client.base_url().host(), "127.0.0.1");
    }

    #[test]
    fn test_from_env() {
        // the only test in this binary touching these variables
        unsafe {
            std::env::set_var(ENV_HOST, "http://localhost:7000");
            std::env::set_var(ENV_API_KEY, "env-key");
            std::env::set_var(ENV_TIMEOUT_SECS, "7");
        }
        let client = StorClientBuilder::from_env().unwrap().build().unwrap();
        assert_eq!(client.base_url().port(), 7000);
        assert_eq!(client.timeout(), Some(Duration::from_secs(7)));

        unsafe {
            std::env::set_var(ENV_TIMEOUT_SECS, "soon");
        }
        assert!(matches!(
            StorClientBuilder::from_env(),
            Err(ConfigErr::InvalidTimeout(_))
        ));

        unsafe {
            std::env::remove_var(ENV_HOST);
            std::env::remove_var(ENV_API_KEY);
            std::env::remove_var(ENV_TIMEOUT_SECS);
        }
        let builder = StorClientBuilder::from_env().unwrap();
        assert_eq!(builder.validate(), Err(ConfigErr::MissingHost));
    }
}
