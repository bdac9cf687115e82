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
use crate::builders::{UploadPart, UploadPartBldr};
use crate::object_content::ObjectContent;

impl StorClient {
    /// Creates an [`UploadPart`] request builder to upload one part of a multipart upload.
    ///
    /// To execute the request, call [`UploadPart::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing an [`UploadPartResponse`](crate::response::UploadPartResponse).
    pub fn upload_part<S1, S2, S3, C>(
        &self,
        bucket: S1,
        object: S2,
        upload_id: S3,
        part_number: u32,
        content: C,
    ) -> UploadPartBldr
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        C: Into<ObjectContent>,
    {
        UploadPart::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
            .upload_id(upload_id)
            .part_number(part_number)
            .content(content.into())
    }
}
