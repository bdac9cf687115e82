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
use crate::response::CreateArchiveResponse;
use crate::types::{ArchiveType, StorApi, StorRequest, ToStorRequest};
use crate::utils::{check_bucket_name, check_object_name};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`create_archive()`](StorClient::create_archive) API.
///
/// Starts building an archive that will be stored under the given key. Entries are
/// added with [`add_archive_entries()`](StorClient::add_archive_entries) and the
/// archive is finished with [`complete_archive()`](StorClient::complete_archive).
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateArchive {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(default)]
    archive_type: ArchiveType,
}

impl StorApi for CreateArchive {
    type StorResponse = CreateArchiveResponse;
}

/// Builder type alias for [`CreateArchive`].
pub type CreateArchiveBldr = CreateArchiveBuilder<((StorClient,), (String,), (String,), ())>;

impl ToStorRequest for CreateArchive {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        let mut query_params = Multimap::new();
        query_params.set("archives", "");
        query_params.set("type", self.archive_type.as_str());

        Ok(StorRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(query_params)
            .build())
    }
}
