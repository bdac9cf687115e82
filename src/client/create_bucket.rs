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
use crate::builders::{CreateBucket, CreateBucketBldr};

impl StorClient {
    /// Creates a [`CreateBucket`] request builder.
    ///
    /// To execute the request, call [`CreateBucket::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing a [`CreateBucketResponse`](crate::response::CreateBucketResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stor::client::StorClient;
    /// use stor::types::StorApi;
    /// use stor::response::CreateBucketResponse;
    /// use stor::response_traits::HasBucket;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = StorClient::new("https://stor.example.com".parse().unwrap(), "key").unwrap();
    ///     let resp: CreateBucketResponse = client
    ///         .create_bucket("bucket-name")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("Made bucket '{}' at {}", resp.bucket(), resp.bucket_info().created_at);
    /// }
    /// ```
    pub fn create_bucket<S: Into<String>>(&self, bucket: S) -> CreateBucketBldr {
        CreateBucket::builder().client(self.clone()).bucket(bucket)
    }
}
