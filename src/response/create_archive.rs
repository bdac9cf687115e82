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
use crate::types::StorRequest;
use crate::{impl_from_stor_response_json, impl_has_stor_fields};
use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArchiveResult {
    #[serde(alias = "Bucket")]
    pub bucket: String,
    #[serde(alias = "Key")]
    pub key: String,
    #[serde(alias = "ArchiveId")]
    pub archive_id: String,
}

/// Response of [create_archive()](crate::client::StorClient::create_archive) API
#[derive(Debug)]
pub struct CreateArchiveResponse {
    request: StorRequest,
    headers: HeaderMap,
    body: Bytes,
    result: CreateArchiveResult,
}

impl_from_stor_response_json!(CreateArchiveResponse);
impl_has_stor_fields!(CreateArchiveResponse);

impl HasBucket for CreateArchiveResponse {}
impl HasObject for CreateArchiveResponse {}

impl CreateArchiveResponse {
    pub fn archive_id(&self) -> &str {
        &self.result.archive_id
    }

    pub fn result(&self) -> &CreateArchiveResult {
        &self.result
    }
}
