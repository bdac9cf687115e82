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

use crate::client::StorClient;
use crate::error::ValidationErr;
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::response::CreateNonceResponse;
use crate::types::{StorApi, StorRequest, ToStorRequest};
use crate::utils::{check_bucket_name, check_object_name};
use http::{Method, StatusCode};
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Argument builder for the [`create_nonce()`](StorClient::create_nonce) API.
///
/// Requests a single-use token for the object that expires after `ttl`. The ttl is
/// sent in whole seconds; fractions are dropped.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateNonce {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(!default)]
    ttl: Duration,
}

impl StorApi for CreateNonce {
    type StorResponse = CreateNonceResponse;
}

/// Builder type alias for [`CreateNonce`].
pub type CreateNonceBldr =
    CreateNonceBuilder<((StorClient,), (String,), (String,), (Duration,))>;

impl ToStorRequest for CreateNonce {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;
        let ttl = self.ttl.as_secs();
        if ttl == 0 {
            return Err(ValidationErr::InvalidTtl(format!(
                "{:?} is shorter than one second",
                self.ttl
            )));
        }

        let mut query_params = Multimap::new();
        query_params.set("nonces", "");
        query_params.set("ttl", ttl.to_string());

        Ok(StorRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(query_params)
            .expected_status(StatusCode::CREATED)
            .build())
    }
}
