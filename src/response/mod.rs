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

//! Responses for STOR operations

mod abort_archive;
mod abort_multipart_upload;
mod add_archive_entries;
mod complete_archive;
mod complete_multipart_upload;
mod create_archive;
mod create_bucket;
mod create_multipart_upload;
mod create_nonce;
mod delete_bucket;
mod delete_objects;
mod get_archive;
mod get_object;
mod list_buckets;
mod list_objects;
mod put_object;
mod upload_part;

pub use abort_archive::AbortArchiveResponse;
pub use abort_multipart_upload::AbortMultipartUploadResponse;
pub use add_archive_entries::AddArchiveEntriesResponse;
pub use complete_archive::CompleteArchiveResponse;
pub use complete_multipart_upload::{CompleteMultipartUploadResponse, CompleteMultipartUploadResult};
pub use create_archive::{CreateArchiveResponse, CreateArchiveResult};
pub use create_bucket::CreateBucketResponse;
pub use create_multipart_upload::{CreateMultipartUploadResponse, CreateMultipartUploadResult};
pub use create_nonce::{CreateNonceResponse, Nonce};
pub use delete_bucket::DeleteBucketResponse;
pub use delete_objects::{DeleteObjectsResponse, DeleteObjectsResult};
pub use get_archive::{GetArchiveResponse, GetArchiveResult};
pub use get_object::{GetObjectResponse, ObjectReader};
pub use list_buckets::{ListBucketsResponse, ListBucketsResult};
pub use list_objects::{ListObjectsResponse, ListObjectsResult};
pub use put_object::PutObjectResponse;
pub use upload_part::UploadPartResponse;
