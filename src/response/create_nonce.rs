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
use crate::utils::UtcTime;
use crate::{impl_from_stor_response_json, impl_has_stor_fields};
use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;

/// A single-use token for an object.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nonce {
    pub nonce: String,
    pub expires_at: UtcTime,
}

/// Response of [create_nonce()](crate::client::StorClient::create_nonce) API
#[derive(Debug)]
pub struct CreateNonceResponse {
    request: StorRequest,
    headers: HeaderMap,
    body: Bytes,
    result: Nonce,
}

impl_from_stor_response_json!(CreateNonceResponse);
impl_has_stor_fields!(CreateNonceResponse);

impl HasBucket for CreateNonceResponse {}
impl HasObject for CreateNonceResponse {}

impl CreateNonceResponse {
    pub fn nonce(&self) -> &Nonce {
        &self.result
    }

    pub fn into_nonce(self) -> Nonce {
        self.result
    }
}
