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

use super::json_body;
use crate::client::StorClient;
use crate::error::ValidationErr;
use crate::header_constants::IF_NONE_MATCH;
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::response::CompleteMultipartUploadResponse;
use crate::types::{PartReference, StorApi, StorRequest, ToStorRequest};
use crate::utils::{check_bucket_name, check_id, check_object_name};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the [`complete_multipart_upload()`](StorClient::complete_multipart_upload) API.
///
/// Assembles the uploaded parts, in the order given, into the final object. With
/// `if_none_match` the object is only created when the key does not exist yet.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CompleteMultipartUpload {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(setter(into))] // force required + accept Into<String>
    upload_id: String,
    #[builder(!default)]
    parts: Vec<PartReference>,
    #[builder(default = false)]
    if_none_match: bool,
}

#[derive(Serialize)]
struct CompleteMultipartUploadRequest<'a> {
    parts: &'a [PartReference],
}

impl StorApi for CompleteMultipartUpload {
    type StorResponse = CompleteMultipartUploadResponse;
}

/// Builder type alias for [`CompleteMultipartUpload`].
pub type CompleteMultipartUploadBldr = CompleteMultipartUploadBuilder<(
    (StorClient,),
    (String,),
    (String,),
    (String,),
    (Vec<PartReference>,),
    (),
)>;

impl ToStorRequest for CompleteMultipartUpload {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;
        check_id(&self.upload_id, ValidationErr::InvalidUploadId)?;
        if self.parts.is_empty() {
            return Err(ValidationErr::EmptyList("parts"));
        }
        if let Some(part) = self.parts.iter().find(|p| p.part_number < 1) {
            return Err(ValidationErr::InvalidPartNumber(part.part_number));
        }

        let (body, content_type) = json_body(&CompleteMultipartUploadRequest {
            parts: &self.parts,
        })?;

        let mut query_params = Multimap::new();
        query_params.set("upload-id", self.upload_id);

        let mut headers = Multimap::new();
        if self.if_none_match {
            headers.set(IF_NONE_MATCH, "*");
        }

        Ok(StorRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(query_params)
            .headers(headers)
            .content_type(content_type)
            .body(body)
            .build())
    }
}
