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
use crate::response::DeleteBucketResponse;
use crate::types::{StorApi, StorRequest, ToStorRequest};
use crate::utils::check_bucket_name;
use http::{Method, StatusCode};
use typed_builder::TypedBuilder;

/// Argument builder for the [`delete_bucket()`](StorClient::delete_bucket) API.
///
/// The bucket must be empty; otherwise the call fails with
/// [`StorError::BucketNotEmpty`](crate::error::StorError::BucketNotEmpty).
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteBucket {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
}

impl StorApi for DeleteBucket {
    type StorResponse = DeleteBucketResponse;
}

/// Builder type alias for [`DeleteBucket`].
pub type DeleteBucketBldr = DeleteBucketBuilder<((StorClient,), (String,))>;

impl ToStorRequest for DeleteBucket {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(StorRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .bucket(self.bucket)
            .expected_status(StatusCode::NO_CONTENT)
            .build())
    }
}
