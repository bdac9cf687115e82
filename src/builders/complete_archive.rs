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
use crate::response::CompleteArchiveResponse;
use crate::types::{StorApi, StorRequest, ToStorRequest};
use crate::utils::{check_bucket_name, check_id, check_object_name};
use http::{Method, StatusCode};
use typed_builder::TypedBuilder;

/// Argument builder for the [`complete_archive()`](StorClient::complete_archive) API.
///
/// Hands the archive over to the server for assembly. Poll
/// [`get_archive()`](StorClient::get_archive) to follow its state.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CompleteArchive {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(setter(into))] // force required + accept Into<String>
    archive_id: String,
    /// Only create the archive object if the key does not exist yet
    #[builder(default = false)]
    if_none_match: bool,
}

impl StorApi for CompleteArchive {
    type StorResponse = CompleteArchiveResponse;
}

/// Builder type alias for [`CompleteArchive`].
pub type CompleteArchiveBldr =
    CompleteArchiveBuilder<((StorClient,), (String,), (String,), (String,), ())>;

impl ToStorRequest for CompleteArchive {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;
        check_id(&self.archive_id, ValidationErr::InvalidArchiveId)?;

        let mut query_params = Multimap::new();
        query_params.set("archive-id", self.archive_id);

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
            .expected_status(StatusCode::NO_CONTENT)
            .build())
    }
}
