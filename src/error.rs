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

//! Error definitions for STOR operations
//!
//! Failures fall into five layers:
//!
//! - [`ValidationErr`]: rejected locally before any network I/O
//! - [`NetworkError`]: the transport failed or the call timed out
//! - [`Error::Decode`]: a success response carried a body that could not be decoded
//! - [`StorError`]: the service reported one of the known error codes
//! - [`ServerError`]: any other unexpected status, carrying the raw code and body

use http::StatusCode;
use thiserror::Error;

/// Configuration errors reported by [`StorClientBuilder::validate`](crate::client::StorClientBuilder::validate).
///
/// Cloneable so the first failed validation can be cached and reported again.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigErr {
    #[error("a host is required")]
    MissingHost,

    #[error("an API key is required")]
    MissingApiKey,

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error(transparent)]
    Config(#[from] ConfigErr),

    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("invalid upload id: {0}")]
    InvalidUploadId(String),

    #[error("invalid part number {0}; part numbers start at 1")]
    InvalidPartNumber(u32),

    #[error("invalid archive id: {0}")]
    InvalidArchiveId(String),

    #[error("{0} must not be empty")]
    EmptyList(&'static str),

    #[error("invalid nonce ttl: {0}")]
    InvalidTtl(String),

    #[error("failed to encode request body: {0}")]
    JsonError(#[source] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("invalid certificate bundle: {0}")]
    InvalidCertificate(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP request failed: {0}")]
    ReqwestError(#[source] reqwest::Error),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else {
            NetworkError::ReqwestError(err)
        }
    }
}

/// The closed set of failures the service reports with a recognized error code.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StorError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("object not found")]
    ObjectNotFound,

    #[error("archive not found")]
    ArchiveNotFound,

    #[error("no such bucket")]
    NoSuchBucket,

    #[error("bucket not empty")]
    BucketNotEmpty,
}

#[derive(Debug, Error)]
pub enum ServerError {
    /// An unexpected status with no recognized error code: status code and raw body.
    #[error("server returned HTTP {0}: {1}")]
    HttpError(u16, String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error(transparent)]
    Stor(#[from] StorError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("{0}")]
    Io(#[from] IoError),
}

/// Result type used by the client, failing with [`Error`] unless told otherwise.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<ConfigErr> for Error {
    fn from(err: ConfigErr) -> Self {
        Error::Validation(ValidationErr::Config(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::from(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(IoError::IOError(err))
    }
}

impl Error {
    /// The HTTP status carried by a generic status error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Server(ServerError::HttpError(code, _)) => StatusCode::from_u16(*code).ok(),
            _ => None,
        }
    }

    /// The domain error kind, if the service reported a recognized code.
    pub fn stor_error(&self) -> Option<&StorError> {
        match self {
            Error::Stor(e) => Some(e),
            _ => None,
        }
    }

    /// Returns true if the call was aborted by the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Network(NetworkError::Timeout))
    }

    /// Returns true for any "does not exist" outcome, typed or generic.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Stor(
                StorError::ObjectNotFound | StorError::ArchiveNotFound | StorError::NoSuchBucket,
            ) => true,
            _ => self.status() == Some(StatusCode::NOT_FOUND),
        }
    }

    /// Returns true when an `If-None-Match: *` precondition failed because the target exists.
    pub fn is_precondition_failed(&self) -> bool {
        self.status() == Some(StatusCode::PRECONDITION_FAILED)
    }
}
