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
use crate::types::{Bucket, StorRequest};
use crate::{impl_from_stor_response_json, impl_has_stor_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of [create_bucket()](crate::client::StorClient::create_bucket) API
#[derive(Debug)]
pub struct CreateBucketResponse {
    request: StorRequest,
    headers: HeaderMap,
    body: Bytes,
    result: Bucket,
}

impl_from_stor_response_json!(CreateBucketResponse);
impl_has_stor_fields!(CreateBucketResponse);

impl HasBucket for CreateBucketResponse {}

impl CreateBucketResponse {
    /// The bucket as created by the server.
    pub fn bucket_info(&self) -> &Bucket {
        &self.result
    }

    pub fn into_bucket_info(self) -> Bucket {
        self.result
    }
}
