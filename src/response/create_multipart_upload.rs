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
pub struct CreateMultipartUploadResult {
    #[serde(alias = "Bucket")]
    pub bucket: String,
    #[serde(alias = "Key")]
    pub key: String,
    #[serde(alias = "UploadId")]
    pub upload_id: String,
}

/// Response of [create_multipart_upload()](crate::client::StorClient::create_multipart_upload) API
#[derive(Debug)]
pub struct CreateMultipartUploadResponse {
    request: StorRequest,
    headers: HeaderMap,
    body: Bytes,
    result: CreateMultipartUploadResult,
}

impl_from_stor_response_json!(CreateMultipartUploadResponse);
impl_has_stor_fields!(CreateMultipartUploadResponse);

impl HasBucket for CreateMultipartUploadResponse {}
impl HasObject for CreateMultipartUploadResponse {}

impl CreateMultipartUploadResponse {
    /// Identifies the upload in all further multipart calls.
    pub fn upload_id(&self) -> &str {
        &self.result.upload_id
    }

    pub fn result(&self) -> &CreateMultipartUploadResult {
        &self.result
    }
}
