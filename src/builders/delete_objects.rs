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
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::response::DeleteObjectsResponse;
use crate::types::{ObjectReference, StorApi, StorRequest, ToStorRequest};
use crate::utils::{check_bucket_name, check_object_name};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the [`delete_objects()`](StorClient::delete_objects) API.
///
/// Deletes several objects in one request. The call succeeds as a whole even when
/// single keys could not be deleted; inspect each
/// [`DeleteResult`](crate::types::DeleteResult) of the response.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteObjects {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(!default)]
    objects: Vec<ObjectReference>,
}

#[derive(Serialize)]
struct DeleteObjectsRequest<'a> {
    objects: &'a [ObjectReference],
}

impl StorApi for DeleteObjects {
    type StorResponse = DeleteObjectsResponse;
}

/// Builder type alias for [`DeleteObjects`].
pub type DeleteObjectsBldr =
    DeleteObjectsBuilder<((StorClient,), (String,), (Vec<ObjectReference>,))>;

impl ToStorRequest for DeleteObjects {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        if self.objects.is_empty() {
            return Err(ValidationErr::EmptyList("objects"));
        }
        for object in &self.objects {
            check_object_name(&object.key)?;
        }

        let (body, content_type) = json_body(&DeleteObjectsRequest {
            objects: &self.objects,
        })?;

        let mut query_params = Multimap::new();
        query_params.set("delete", "");

        Ok(StorRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .bucket(self.bucket)
            .query_params(query_params)
            .content_type(content_type)
            .body(body)
            .build())
    }
}
