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
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::response::GetArchiveResponse;
use crate::types::{StorApi, StorRequest, ToStorRequest};
use crate::utils::{check_bucket_name, check_id, check_object_name};
use typed_builder::TypedBuilder;

/// Argument builder for the [`get_archive()`](StorClient::get_archive) API.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetArchive {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(setter(into))] // force required + accept Into<String>
    archive_id: String,
}

impl StorApi for GetArchive {
    type StorResponse = GetArchiveResponse;
}

/// Builder type alias for [`GetArchive`].
pub type GetArchiveBldr = GetArchiveBuilder<((StorClient,), (String,), (String,), (String,))>;

impl ToStorRequest for GetArchive {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;
        check_id(&self.archive_id, ValidationErr::InvalidArchiveId)?;

        let mut query_params = Multimap::new();
        query_params.set("archive-id", self.archive_id);

        Ok(StorRequest::builder()
            .client(self.client)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(query_params)
            .not_found(StorError::ArchiveNotFound)
            .build())
    }
}
