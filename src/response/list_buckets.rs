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

use crate::types::{Bucket, StorRequest};
use crate::utils::null_as_default;
use crate::{impl_from_stor_response_json, impl_has_stor_fields};
use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;

/// One page of buckets.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBucketsResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub buckets: Vec<Bucket>,
    /// True when more buckets follow the last one of this page.
    #[serde(default)]
    pub is_truncated: bool,
}

/// Response of [list_buckets()](crate::client::StorClient::list_buckets) API
#[derive(Debug)]
pub struct ListBucketsResponse {
    request: StorRequest,
    headers: HeaderMap,
    body: Bytes,
    result: ListBucketsResult,
}

impl_from_stor_response_json!(ListBucketsResponse);
impl_has_stor_fields!(ListBucketsResponse);

impl ListBucketsResponse {
    pub fn buckets(&self) -> &[Bucket] {
        &self.result.buckets
    }

    pub fn is_truncated(&self) -> bool {
        self.result.is_truncated
    }

    pub fn into_result(self) -> ListBucketsResult {
        self.result
    }
}
