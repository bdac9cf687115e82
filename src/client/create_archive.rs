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
use crate::builders::{CreateArchive, CreateArchiveBldr};

impl StorClient {
    /// Creates a [`CreateArchive`] request builder to start an archive stored under `object`.
    ///
    /// To execute the request, call [`CreateArchive::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing a [`CreateArchiveResponse`](crate::response::CreateArchiveResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stor::client::StorClient;
    /// use stor::types::{ArchiveEntry, StorApi};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = StorClient::new("https://stor.example.com".parse().unwrap(), "key").unwrap();
    ///     let archive = client
    ///         .create_archive("bucket-name", "photos.zip")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///
    ///     client
    ///         .add_archive_entries(
    ///             "bucket-name",
    ///             "photos.zip",
    ///             archive.archive_id(),
    ///             vec![ArchiveEntry::new("photos/1.jpg", "1.jpg")],
    ///         )
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///
    ///     client
    ///         .complete_archive("bucket-name", "photos.zip", archive.archive_id())
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn create_archive<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> CreateArchiveBldr {
        CreateArchive::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
    }
}
