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
use crate::builders::{CreateNonce, CreateNonceBldr};
use std::time::Duration;

impl StorClient {
    /// Creates a [`CreateNonce`] request builder to obtain a single-use token for an object.
    ///
    /// To execute the request, call [`CreateNonce::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing a [`CreateNonceResponse`](crate::response::CreateNonceResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use stor::client::StorClient;
    /// use stor::types::StorApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = StorClient::new("https://stor.example.com".parse().unwrap(), "key").unwrap();
    ///     let resp = client
    ///         .create_nonce("bucket-name", "report.pdf", Duration::from_secs(300))
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("{} expires at {}", resp.nonce().nonce, resp.nonce().expires_at);
    /// }
    /// ```
    pub fn create_nonce<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
        ttl: Duration,
    ) -> CreateNonceBldr {
        CreateNonce::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
            .ttl(ttl)
    }
}
