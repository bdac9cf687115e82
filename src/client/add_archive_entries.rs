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

use super::StorClient;
use crate::builders::{AddArchiveEntries, AddArchiveEntriesBldr};
use crate::types::ArchiveEntry;

impl StorClient {
    /// Creates an [`AddArchiveEntries`] request builder to add objects to an archive.
    ///
    /// To execute the request, call [`AddArchiveEntries::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing an [`AddArchiveEntriesResponse`](crate::response::AddArchiveEntriesResponse).
    pub fn add_archive_entries<S1, S2, S3>(
        &self,
        bucket: S1,
        object: S2,
        archive_id: S3,
        entries: Vec<ArchiveEntry>,
    ) -> AddArchiveEntriesBldr
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        AddArchiveEntries::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
            .archive_id(archive_id)
            .entries(entries)
    }
}
