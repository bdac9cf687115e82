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
use crate::builders::{ListBuckets, ListBucketsBldr};

impl StorClient {
    /// Creates a [`ListBuckets`] request builder to list the buckets of the account.
    ///
    /// To execute the request, call [`ListBuckets::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing a [`ListBucketsResponse`](crate::response::ListBucketsResponse).
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
    ///     let resp = client.list_buckets().max_buckets(10).build().send().await.unwrap();
    ///     for bucket in resp.buckets() {
    ///         println!("{} holds {} objects", bucket.name, bucket.objects);
    ///     }
    /// }
    /// ```
    pub fn list_buckets(&self) -> ListBucketsBldr {
        ListBuckets::builder().client(self.clone())
    }
}
