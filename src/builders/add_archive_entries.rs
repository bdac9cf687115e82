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
use crate::response::AddArchiveEntriesResponse;
use crate::types::{ArchiveEntry, StorApi, StorRequest, ToStorRequest};
use crate::utils::{check_bucket_name, check_id, check_object_name};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the [`add_archive_entries()`](StorClient::add_archive_entries) API.
#[derive(Clone, Debug, TypedBuilder)]
pub struct AddArchiveEntries {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(setter(into))] // force required + accept Into<String>
    archive_id: String,
    #[builder(!default)]
    entries: Vec<ArchiveEntry>,
}

#[derive(Serialize)]
struct AddArchiveEntriesRequest<'a> {
    entries: &'a [ArchiveEntry],
}

impl StorApi for AddArchiveEntries {
    type StorResponse = AddArchiveEntriesResponse;
}

/// Builder type alias for [`AddArchiveEntries`].
pub type AddArchiveEntriesBldr = AddArchiveEntriesBuilder<(
    (StorClient,),
    (String,),
    (String,),
    (String,),
    (Vec<ArchiveEntry>,),
)>;

impl ToStorRequest for AddArchiveEntries {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;
        check_id(&self.archive_id, ValidationErr::InvalidArchiveId)?;
        if self.entries.is_empty() {
            return Err(ValidationErr::EmptyList("entries"));
        }
        for entry in &self.entries {
            check_object_name(&entry.key)?;
        }

        let (body, content_type) = json_body(&AddArchiveEntriesRequest {
            entries: &self.entries,
        })?;

        let mut query_params = Multimap::new();
        query_params.set("archive-id", self.archive_id);

        Ok(StorRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(query_params)
            .content_type(content_type)
            .body(body)
            .build())
    }
}
