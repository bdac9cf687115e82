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
use crate::builders::{ListObjects, ListObjectsBldr};

impl StorClient {
    /// Creates a [`ListObjects`] request builder to list one page of the objects in a bucket.
    ///
    /// To execute the request, call [`ListObjects::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing a [`ListObjectsResponse`](crate::response::ListObjectsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stor::client::StorClient;
    /// use stor::types::StorApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = StorClient::new("https://stor.example.com".parse().unwrap(), "key").unwrap();
    ///     let resp = client
    ///         .list_objects("bucket-name")
    ///         .prefix("photos/")
    ///         .delimiter("/")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     for object in resp.objects() {
    ///         println!("{} ({} bytes)", object.key, object.size);
    ///     }
    /// }
    /// ```
    pub fn list_objects<S: Into<String>>(&self, bucket: S) -> ListObjectsBldr {
        ListObjects::builder().client(self.clone()).bucket(bucket)
    }
}
