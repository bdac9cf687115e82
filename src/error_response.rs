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

//! Structured error bodies returned by the service and their mapping to [`StorError`].

use crate::error::StorError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Error codes as returned by the server in the `code` field of an error body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StorErrorCode {
    InvalidCredentials,
    NoSuchArchive,
    NoSuchBucket,
    BucketNotEmpty,

    #[default]
    NoError,

    /// Any code not explicitly known to this client.
    OtherError(String),
}

#[allow(dead_code)]
const ALL_STOR_ERROR_CODES: &[StorErrorCode] = &[
    StorErrorCode::InvalidCredentials,
    StorErrorCode::NoSuchArchive,
    StorErrorCode::NoSuchBucket,
    StorErrorCode::BucketNotEmpty,
    StorErrorCode::NoError,
];

impl FromStr for StorErrorCode {
    type Err = Infallible;

    /// Codes are matched exactly; the service's spelling is authoritative.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "InvalidCredentials" => StorErrorCode::InvalidCredentials,
            "NoSuchArchive" => StorErrorCode::NoSuchArchive,
            "NoSuchBucket" => StorErrorCode::NoSuchBucket,
            "BucketNotEmpty" => StorErrorCode::BucketNotEmpty,
            "NoError" => StorErrorCode::NoError,
            v => StorErrorCode::OtherError(v.to_owned()),
        })
    }
}

impl std::fmt::Display for StorErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorErrorCode::InvalidCredentials => write!(f, "InvalidCredentials"),
            StorErrorCode::NoSuchArchive => write!(f, "NoSuchArchive"),
            StorErrorCode::NoSuchBucket => write!(f, "NoSuchBucket"),
            StorErrorCode::BucketNotEmpty => write!(f, "BucketNotEmpty"),
            StorErrorCode::NoError => write!(f, "NoError"),
            StorErrorCode::OtherError(code) => write!(f, "{code}"),
        }
    }
}

impl StorErrorCode {
    /// The domain error this code stands for, if any.
    pub fn as_stor_error(&self) -> Option<StorError> {
        match self {
            StorErrorCode::InvalidCredentials => Some(StorError::InvalidCredentials),
            StorErrorCode::NoSuchArchive => Some(StorError::ArchiveNotFound),
            StorErrorCode::NoSuchBucket => Some(StorError::NoSuchBucket),
            StorErrorCode::BucketNotEmpty => Some(StorError::BucketNotEmpty),
            StorErrorCode::NoError | StorErrorCode::OtherError(_) => None,
        }
    }
}

/// Error body `{"code": ..., "message": ...}`.
///
/// Also used for the per-key `error` field of bulk delete results.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "Code")]
    pub code: String,
    #[serde(default, alias = "Message")]
    pub message: String,
}

impl ErrorResponse {
    pub fn code(&self) -> StorErrorCode {
        // infallible
        self.code.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Maps an error body to a domain error.
///
/// Returns `None` when the body is not a structured error record or its code is not one of
/// the recognized codes, in which case the caller falls back to a generic status error.
pub fn map_error_response(body: &[u8]) -> Option<StorError> {
    let resp: ErrorResponse = serde_json::from_slice(body).ok()?;
    let mapped = resp.code().as_stor_error();
    if mapped.is_none() {
        log::debug!("unmapped error response {resp}");
    }
    mapped
}
