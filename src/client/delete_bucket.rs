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
use crate::builders::{DeleteBucket, DeleteBucketBldr};

impl StorClient {
    /// Creates a [`DeleteBucket`] request builder to delete an empty bucket.
    ///
    /// To execute the request, call [`DeleteBucket::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing a [`DeleteBucketResponse`](crate::response::DeleteBucketResponse).
    pub fn delete_bucket<S: Into<String>>(&self, bucket: S) -> DeleteBucketBldr {
        DeleteBucket::builder().client(self.clone()).bucket(bucket)
    }
}
