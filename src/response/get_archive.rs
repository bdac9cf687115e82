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

use crate::response_traits::{HasBucket, HasObject};
use crate::types::{ArchiveState, StorRequest};
use crate::{impl_from_stor_response_json, impl_has_stor_fields};
use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct GetArchiveResult {
    pub id: String,
    pub state: ArchiveState,
    /// Archive format, e.g. `zip`
    #[serde(rename = "type")]
    pub archive_type: String,
}

/// Response of [get_archive()](crate::client::StorClient::get_archive) API
#[derive(Debug)]
pub struct GetArchiveResponse {
    request: StorRequest,
    headers: HeaderMap,
    body: Bytes,
    result: GetArchiveResult,
}

impl_from_stor_response_json!(GetArchiveResponse);
impl_has_stor_fields!(GetArchiveResponse);

impl HasBucket for GetArchiveResponse {}
impl HasObject for GetArchiveResponse {}

impl GetArchiveResponse {
    pub fn archive_id(&self) -> &str {
        &self.result.id
    }

    pub fn state(&self) -> ArchiveState {
        self.result.state
    }

    pub fn result(&self) -> &GetArchiveResult {
        &self.result
    }
}
