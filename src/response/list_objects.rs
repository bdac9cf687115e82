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

use crate::response_traits::HasBucket;
use crate::types::{Object, StorRequest};
use crate::utils::null_as_default;
use crate::{impl_from_stor_response_json, impl_has_stor_fields};
use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;

/// One page of a bucket listing.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListObjectsResult {
    pub is_truncated: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub objects: Vec<Object>,
    /// Name of the listed bucket
    pub name: String,
    pub max_keys: u32,
    pub key_count: u32,
    #[serde(default)]
    pub start_after: Option<String>,
    /// Prefixes rolled up by the delimiter, if one was given
    #[serde(default, deserialize_with = "null_as_default")]
    pub common_prefixes: Vec<String>,
}

/// Response of [list_objects()](crate::client::StorClient::list_objects) API
#[derive(Debug)]
pub struct ListObjectsResponse {
    request: StorRequest,
    headers: HeaderMap,
    body: Bytes,
    result: ListObjectsResult,
}

impl_from_stor_response_json!(ListObjectsResponse);
impl_has_stor_fields!(ListObjectsResponse);

impl HasBucket for ListObjectsResponse {}

impl ListObjectsResponse {
    pub fn objects(&self) -> &[Object] {
        &self.result.objects
    }

    pub fn common_prefixes(&self) -> &[String] {
        &self.result.common_prefixes
    }

    pub fn is_truncated(&self) -> bool {
        self.result.is_truncated
    }

    /// The key to pass as `start_after` for the next page, if there is one.
    pub fn next_start_after(&self) -> Option<&str> {
        if !self.result.is_truncated {
            return None;
        }
        self.result.objects.last().map(|o| o.key.as_str())
    }

    pub fn result(&self) -> &ListObjectsResult {
        &self.result
    }

    pub fn into_result(self) -> ListObjectsResult {
        self.result
    }
}
