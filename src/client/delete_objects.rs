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
use crate::builders::{DeleteObjects, DeleteObjectsBldr};
use crate::types::ObjectReference;

impl StorClient {
    /// Creates a [`DeleteObjects`] request builder to delete several objects at once.
    ///
    /// To execute the request, call [`DeleteObjects::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing a [`DeleteObjectsResponse`](crate::response::DeleteObjectsResponse)
    /// with one result per key.
    pub fn delete_objects<S, I, K>(&self, bucket: S, keys: I) -> DeleteObjectsBldr
    where
        S: Into<String>,
        I: IntoIterator<Item = K>,
        K: Into<ObjectReference>,
    {
        DeleteObjects::builder()
            .client(self.clone())
            .bucket(bucket)
            .objects(keys.into_iter().map(Into::into).collect())
    }
}
