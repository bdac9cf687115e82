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

use crate::cleanup_guard::CleanupGuard;
use crate::mock_server::MockServer;
use crate::utils::rand_bucket_name;
use std::sync::Arc;
use std::time::Duration;
use stor::client::{StorClient, StorClientBuilder};
use stor::http::BaseUrl;
use stor::types::StorApi;
use uuid::Uuid;

/// A client wired to a freshly started [`MockServer`].
#[derive(Clone)]
pub struct TestContext {
    pub client: StorClient,
    pub server: Arc<MockServer>,
    pub base_url: BaseUrl,
    pub api_key: String,
}

impl TestContext {
    pub async fn new() -> Self {
        let api_key = format!("test-{}", Uuid::new_v4().simple());
        let server = MockServer::start(&api_key).await;
        let base_url: BaseUrl = server.base_url().parse().unwrap();
        log::debug!("STOR_HOST={base_url}");

        let client = StorClientBuilder::new(base_url.clone())
            .api_key(&api_key)
            .build()
            .unwrap();

        Self {
            client,
            server: Arc::new(server),
            base_url,
            api_key,
        }
    }

    /// A client for the same server with another call timeout.
    pub fn client_with_timeout(&self, timeout: Duration) -> StorClient {
        StorClientBuilder::new(self.base_url.clone())
            .api_key(&self.api_key)
            .timeout(timeout)
            .build()
            .unwrap()
    }

    /// A client for the same server that presents the wrong API key.
    pub fn client_with_api_key(&self, api_key: &str) -> StorClient {
        StorClient::new(self.base_url.clone(), api_key).unwrap()
    }

    /// Creates a temporary bucket with an automatic cleanup guard.
    ///
    /// # Example
    /// ```ignore
    /// let (bucket_name, guard) = ctx.create_bucket_helper().await;
    /// println!("Created temporary bucket: {}", bucket_name);
    /// guard.cleanup().await;
    /// ```
    pub async fn create_bucket_helper(&self) -> (String, CleanupGuard) {
        let bucket_name = rand_bucket_name();
        let _resp = self
            .client
            .create_bucket(&bucket_name)
            .build()
            .send()
            .await
            .unwrap();
        let guard = CleanupGuard::new(self.client.clone(), &bucket_name);
        (bucket_name, guard)
    }
}
