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
use crate::types::{DeleteResult, StorRequest};
use crate::utils::null_as_default;
use crate::{impl_from_stor_response_json, impl_has_stor_fields};
use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct DeleteObjectsResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<DeleteResult>,
}

/// Response of [delete_objects()](crate::client::StorClient::delete_objects) API
///
/// Holds one [`DeleteResult`] per requested key.
#[derive(Debug)]
pub struct DeleteObjectsResponse {
    request: StorRequest,
    headers: HeaderMap,
    body: Bytes,
    result: DeleteObjectsResult,
}

impl_from_stor_response_json!(DeleteObjectsResponse);
impl_has_stor_fields!(DeleteObjectsResponse);

impl HasBucket for DeleteObjectsResponse {}

impl DeleteObjectsResponse {
    pub fn results(&self) -> &[DeleteResult] {
        &self.result.results
    }

    /// Results for keys the server could not delete.
    pub fn errors(&self) -> impl Iterator<Item = &DeleteResult> {
        self.result.results.iter().filter(|r| !r.deleted)
    }

    pub fn into_results(self) -> Vec<DeleteResult> {
        self.result.results
    }
}
