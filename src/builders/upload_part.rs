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
use crate::object_content::ObjectContent;
use crate::response::UploadPartResponse;
use crate::types::{StorApi, StorRequest, ToStorRequest};
use crate::utils::{check_bucket_name, check_id, check_object_name};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`upload_part()`](StorClient::upload_part) API.
///
/// Part numbers start at 1. Keep the returned etag together with the part number;
/// both are needed to complete the upload.
#[derive(Debug, TypedBuilder)]
pub struct UploadPart {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(setter(into))] // force required + accept Into<String>
    upload_id: String,
    #[builder(!default)]
    part_number: u32,
    #[builder(!default)]
    content: ObjectContent,
    /// Length of a streamed part; in-memory and file content know their own length.
    #[builder(default, setter(strip_option))]
    content_length: Option<u64>,
}

impl StorApi for UploadPart {
    type StorResponse = UploadPartResponse;
}

/// Builder type alias for [`UploadPart`].
pub type UploadPartBldr = UploadPartBuilder<(
    (StorClient,),
    (String,),
    (String,),
    (String,),
    (u32,),
    (ObjectContent,),
    (),
)>;

impl ToStorRequest for UploadPart {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;
        check_id(&self.upload_id, ValidationErr::InvalidUploadId)?;
        if self.part_number < 1 {
            return Err(ValidationErr::InvalidPartNumber(self.part_number));
        }

        let mut query_params = Multimap::new();
        query_params.set("upload-id", self.upload_id);
        query_params.set("part-number", self.part_number.to_string());

        Ok(StorRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(query_params)
            .content_length(self.content_length)
            .body(self.content)
            .build())
    }
}
