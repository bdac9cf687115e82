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
use crate::builders::{GetObject, GetObjectBldr};

impl StorClient {
    /// Creates a [`GetObject`] request builder to read an object as a stream.
    ///
    /// To execute the request, call [`GetObject::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing a [`GetObjectResponse`](crate::response::GetObjectResponse).
    /// A missing object fails with [`StorError::ObjectNotFound`](crate::error::StorError::ObjectNotFound).
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
    ///     let mut resp = client.get_object("bucket-name", "hello.txt").build().send().await.unwrap();
    ///     while let Some(chunk) = resp.reader().chunk().await.unwrap() {
    ///         println!("read {} bytes", chunk.len());
    ///     }
    ///     resp.close();
    /// }
    /// ```
    pub fn get_object<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> GetObjectBldr {
        GetObject::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
    }
}
