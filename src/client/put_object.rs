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
use crate::builders::{PutObject, PutObjectBldr};
use crate::object_content::ObjectContent;

impl StorClient {
    /// Creates a [`PutObject`] request builder to upload an object in a single request.
    ///
    /// To execute the request, call [`PutObject::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing a [`PutObjectResponse`](crate::response::PutObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stor::client::StorClient;
    /// use stor::types::StorApi;
    /// use stor::response_traits::HasEtagFromHeaders;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = StorClient::new("https://stor.example.com".parse().unwrap(), "key").unwrap();
    ///     let resp = client
    ///         .put_object("bucket-name", "hello.txt", "Hello, world!")
    ///         .content_type("text/plain")
    ///         .if_none_match(true)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("stored with etag {}", resp.etag());
    /// }
    /// ```
    pub fn put_object<S1: Into<String>, S2: Into<String>, C: Into<ObjectContent>>(
        &self,
        bucket: S1,
        object: S2,
        content: C,
    ) -> PutObjectBldr {
        PutObject::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
            .content(content.into())
    }
}
