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
use crate::error::{StorError, ValidationErr};
use crate::response::GetObjectResponse;
use crate::types::{StorApi, StorRequest, ToStorRequest};
use crate::utils::{check_bucket_name, check_object_name};
use typed_builder::TypedBuilder;

/// Argument builder for the [`get_object()`](StorClient::get_object) API.
///
/// The response body is not buffered: [`GetObjectResponse`] hands out an open reader
/// that must be read and closed by the caller.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetObject {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
}

impl StorApi for GetObject {
    type StorResponse = GetObjectResponse;
}

/// Builder type alias for [`GetObject`].
pub type GetObjectBldr = GetObjectBuilder<((StorClient,), (String,), (String,))>;

impl ToStorRequest for GetObject {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        Ok(StorRequest::builder()
            .client(self.client)
            .bucket(self.bucket)
            .object(self.object)
            .not_found(StorError::ObjectNotFound)
            .streaming(true)
            .build())
    }
}
