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

use stor::client::StorClient;
use stor::types::StorApi;

/// Cleanup guard that empties and removes a bucket
pub struct CleanupGuard {
    client: StorClient,
    bucket_name: String,
}

impl CleanupGuard {
    pub fn new<S: Into<String>>(client: StorClient, bucket_name: S) -> Self {
        Self {
            client,
            bucket_name: bucket_name.into(),
        }
    }

    pub async fn cleanup(&self) {
        cleanup(self.client.clone(), &self.bucket_name).await;
    }
}

pub async fn cleanup(client: StorClient, bucket_name: &str) {
    tokio::select!(
        _ = tokio::time::sleep(std::time::Duration::from_secs(60)) => {
            eprintln!("Cleanup timeout after 60s while removing bucket {bucket_name}");
        },
        outcome = empty_and_delete_bucket(&client, bucket_name) => {
            if let Err(e) = outcome {
                eprintln!("Error removing bucket '{bucket_name}':\n{e}");
            }
        }
    );
}

async fn empty_and_delete_bucket(client: &StorClient, bucket_name: &str) -> Result<(), stor::error::Error> {
    loop {
        let resp = client.list_objects(bucket_name).build().send().await?;
        let keys: Vec<String> = resp.objects().iter().map(|o| o.key.clone()).collect();
        if keys.is_empty() {
            break;
        }
        client.delete_objects(bucket_name, keys).build().send().await?;
    }
    client.delete_bucket(bucket_name).build().send().await?;
    Ok(())
}
