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
use crate::response::CreateBucketResponse;
use crate::types::{StorApi, StorRequest, ToStorRequest};
use crate::utils::check_bucket_name;
use http::{Method, StatusCode};
use typed_builder::TypedBuilder;

/// Argument builder for the [`create_bucket()`](StorClient::create_bucket) API.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateBucket {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
}

impl StorApi for CreateBucket {
    type StorResponse = CreateBucketResponse;
}

/// Builder type alias for [`CreateBucket`].
pub type CreateBucketBldr = CreateBucketBuilder<((StorClient,), (String,))>;

impl ToStorRequest for CreateBucket {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(StorRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .bucket(self.bucket)
            .expected_status(StatusCode::CREATED)
            .build())
    }
}
