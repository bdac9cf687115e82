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
use crate::response::CreateMultipartUploadResponse;
use crate::types::{StorApi, StorRequest, ToStorRequest};
use crate::utils::{check_bucket_name, check_object_name};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`create_multipart_upload()`](StorClient::create_multipart_upload) API.
///
/// Starts a multipart upload. The returned upload id is passed to
/// [`upload_part()`](StorClient::upload_part) and then to
/// [`complete_multipart_upload()`](StorClient::complete_multipart_upload) or
/// [`abort_multipart_upload()`](StorClient::abort_multipart_upload).
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateMultipartUpload {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    /// Content type of the assembled object
    #[builder(default, setter(into, strip_option))]
    content_type: Option<String>,
}

impl StorApi for CreateMultipartUpload {
    type StorResponse = CreateMultipartUploadResponse;
}

/// Builder type alias for [`CreateMultipartUpload`].
pub type CreateMultipartUploadBldr =
    CreateMultipartUploadBuilder<((StorClient,), (String,), (String,), ())>;

impl ToStorRequest for CreateMultipartUpload {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        let mut query_params = Multimap::new();
        query_params.set("uploads", "");

        Ok(StorRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(query_params)
            .content_type(self.content_type)
            .build())
    }
}
