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

use crate::multimap_ext::MultimapExt;
use crate::response_traits::{HasBucket, HasEtagFromHeaders, HasObject};
use crate::types::{PartReference, StorRequest};
use crate::{impl_from_stor_response, impl_has_stor_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of [upload_part()](crate::client::StorClient::upload_part) API
#[derive(Debug)]
pub struct UploadPartResponse {
    request: StorRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_stor_response!(UploadPartResponse);
impl_has_stor_fields!(UploadPartResponse);

impl HasBucket for UploadPartResponse {}
impl HasObject for UploadPartResponse {}
impl HasEtagFromHeaders for UploadPartResponse {}

impl UploadPartResponse {
    pub fn part_number(&self) -> u32 {
        self.request
            .query_params()
            .first_value("part-number")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    /// The reference to pass to
    /// [complete_multipart_upload()](crate::client::StorClient::complete_multipart_upload).
    pub fn part_reference(&self) -> PartReference {
        PartReference::new(self.part_number(), self.etag())
    }
}
