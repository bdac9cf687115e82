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

//! Various utility and helper functions

use crate::error::ValidationErr;
use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Deserializer};
pub use urlencoding::encode as urlencode;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encodes an object key for use in a URL path, keeping `/` separators intact.
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Validates a bucket name before it is placed in a request path.
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    if bucket_name.trim().is_empty() {
        return Err(ValidationErr::InvalidBucketName(
            "bucket name cannot be empty".into(),
        ));
    }
    if bucket_name.contains('/') {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name '{bucket_name}' cannot contain '/'"
        )));
    }
    if is_dot_segment(bucket_name) {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name '{bucket_name}' is a relative path segment"
        )));
    }
    Ok(())
}

/// Validates an object key before it is placed in a request path.
pub fn check_object_name(object_name: &str) -> Result<(), ValidationErr> {
    if object_name.is_empty() {
        return Err(ValidationErr::InvalidObjectName(
            "object name cannot be empty".into(),
        ));
    }
    // URL normalization resolves dot segments, percent-encoded ones included, so the request
    // would land on another path.
    if object_name.split('/').any(is_dot_segment) {
        return Err(ValidationErr::InvalidObjectName(format!(
            "object name '{object_name}' cannot contain '.' or '..' path segments"
        )));
    }
    Ok(())
}

fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

/// Validates a server-issued identifier (upload id, archive id).
pub(crate) fn check_id(
    id: &str,
    err: fn(String) -> ValidationErr,
) -> Result<(), ValidationErr> {
    if id.trim().is_empty() {
        return Err(err("identifier cannot be empty".into()));
    }
    Ok(())
}

/// Deserializes `null` like a missing field, as the default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
