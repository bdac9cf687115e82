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
use crate::builders::{CreateMultipartUpload, CreateMultipartUploadBldr};

impl StorClient {
    /// Creates a [`CreateMultipartUpload`] request builder to start a multipart upload.
    ///
    /// To execute the request, call [`CreateMultipartUpload::send()`](crate::types::StorApi::send),
    /// which returns a [`Result`] containing a [`CreateMultipartUploadResponse`](crate::response::CreateMultipartUploadResponse).
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
    ///     let upload = client
    ///         .create_multipart_upload("bucket-name", "video.mp4")
    ///         .content_type("video/mp4")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///
    ///     let part = client
    ///         .upload_part("bucket-name", "video.mp4", upload.upload_id(), 1, vec![0u8; 1024])
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///
    ///     client
    ///         .complete_multipart_upload("bucket-name", "video.mp4", upload.upload_id(), vec![part.part_reference()])
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn create_multipart_upload<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> CreateMultipartUploadBldr {
        CreateMultipartUpload::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
    }
}
