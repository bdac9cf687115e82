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
use crate::header_constants::IF_NONE_MATCH;
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::object_content::ObjectContent;
use crate::response::PutObjectResponse;
use crate::types::{StorApi, StorRequest, ToStorRequest};
use crate::utils::{check_bucket_name, check_object_name};
use http::{Method, StatusCode};
use typed_builder::TypedBuilder;

/// Argument builder for the [`put_object()`](StorClient::put_object) API.
///
/// Uploads an object in a single request. The content is streamed when it comes from
/// a file or a stream. Set `if_none_match` to only create the object when the key
/// does not exist yet; an existing key then fails with HTTP 412, see
/// [`Error::is_precondition_failed`](crate::error::Error::is_precondition_failed).
#[derive(Debug, TypedBuilder)]
pub struct PutObject {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(!default)]
    content: ObjectContent,
    #[builder(default, setter(into, strip_option))]
    content_type: Option<String>,
    #[builder(default = false)]
    if_none_match: bool,
}

impl StorApi for PutObject {
    type StorResponse = PutObjectResponse;
}

/// Builder type alias for [`PutObject`].
pub type PutObjectBldr =
    PutObjectBuilder<((StorClient,), (String,), (String,), (ObjectContent,), (), ())>;

impl ToStorRequest for PutObject {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        let mut headers = Multimap::new();
        if self.if_none_match {
            headers.set(IF_NONE_MATCH, "*");
        }

        Ok(StorRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .bucket(self.bucket)
            .object(self.object)
            .headers(headers)
            .content_type(self.content_type)
            .body(self.content)
            .expected_status(StatusCode::NO_CONTENT)
            .build())
    }
}
