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
use crate::builders::{CompleteMultipartUpload, CompleteMultipartUploadBldr};
use crate::types::PartReference;

impl StorClient {
    /// Creates a [`CompleteMultipartUpload`] request builder to assemble the uploaded parts.
    ///
    /// To execute the request, call [`CompleteMultipartUpload::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing a [`CompleteMultipartUploadResponse`](crate::response::CompleteMultipartUploadResponse).
    pub fn complete_multipart_upload<S1, S2, S3>(
        &self,
        bucket: S1,
        object: S2,
        upload_id: S3,
        parts: Vec<PartReference>,
    ) -> CompleteMultipartUploadBldr
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        CompleteMultipartUpload::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
            .upload_id(upload_id)
            .parts(parts)
    }
}
