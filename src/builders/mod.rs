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

//! Argument builders for STOR operations

// Bucket operations
mod create_bucket;
mod delete_bucket;
mod list_buckets;

pub use create_bucket::{CreateBucket, CreateBucketBldr};
pub use delete_bucket::{DeleteBucket, DeleteBucketBldr};
pub use list_buckets::{ListBuckets, ListBucketsBldr};

// Object operations
mod delete_objects;
mod get_object;
mod list_objects;
mod put_object;

pub use delete_objects::{DeleteObjects, DeleteObjectsBldr};
pub use get_object::{GetObject, GetObjectBldr};
pub use list_objects::{ListObjects, ListObjectsBldr};
pub use put_object::{PutObject, PutObjectBldr};

// Multipart uploads
mod abort_multipart_upload;
mod complete_multipart_upload;
mod create_multipart_upload;
mod upload_part;

pub use abort_multipart_upload::{AbortMultipartUpload, AbortMultipartUploadBldr};
pub use complete_multipart_upload::{CompleteMultipartUpload, CompleteMultipartUploadBldr};
pub use create_multipart_upload::{CreateMultipartUpload, CreateMultipartUploadBldr};
pub use upload_part::{UploadPart, UploadPartBldr};

// Archives
mod abort_archive;
mod add_archive_entries;
mod complete_archive;
mod create_archive;
mod get_archive;

pub use abort_archive::{AbortArchive, AbortArchiveBldr};
pub use add_archive_entries::{AddArchiveEntries, AddArchiveEntriesBldr};
pub use complete_archive::{CompleteArchive, CompleteArchiveBldr};
pub use create_archive::{CreateArchive, CreateArchiveBldr};
pub use get_archive::{GetArchive, GetArchiveBldr};

// Nonces
mod create_nonce;

pub use create_nonce::{CreateNonce, CreateNonceBldr};

pub use crate::object_content::{ObjectContent, Size};

use crate::error::ValidationErr;
use crate::header_constants::APPLICATION_JSON;
use serde::Serialize;

/// Encodes a request body as JSON, returning the content and its content type.
pub(crate) fn json_body<T: Serialize>(value: &T) -> Result<(ObjectContent, String), ValidationErr> {
    let data = serde_json::to_vec(value).map_err(ValidationErr::JsonError)?;
    Ok((ObjectContent::from(data), APPLICATION_JSON.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::client::StorClient;
    use crate::error::ValidationErr;
    use crate::multimap_ext::MultimapExt;
    use crate::types::{ArchiveEntry, PartReference, StorRequest, ToStorRequest};
    use http::{Method, StatusCode};
    use std::time::Duration;

    fn client() -> StorClient {
        StorClient::new("http://127.0.0.1:9000".parse().unwrap(), "test-key").unwrap()
    }

    async fn body_json(req: &mut StorRequest) -> serde_json::Value {
        let body = req.body.take().unwrap().to_bytes().await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_create_bucket_request() {
        let req = client().create_bucket("b1").build().to_stor_request().unwrap();
        assert_eq!(req.method(), &Method::PUT);
        assert_eq!(req.bucket(), Some("b1"));
        assert_eq!(req.object(), None);
        assert_eq!(req.expected_status, StatusCode::CREATED);
    }

    #[test]
    fn test_list_buckets_only_sends_meaningful_params() {
        let req = client().list_buckets().build().to_stor_request().unwrap();
        assert!(req.query_params().is_empty());
        assert_eq!(req.bucket(), None);

        let req = client()
            .list_buckets()
            .start_after("")
            .max_buckets(0)
            .build()
            .to_stor_request()
            .unwrap();
        assert!(req.query_params().is_empty());

        let req = client()
            .list_buckets()
            .start_after("b1")
            .max_buckets(10)
            .build()
            .to_stor_request()
            .unwrap();
        assert_eq!(req.query_params().first_value("start-after"), Some("b1"));
        assert_eq!(req.query_params().first_value("max-buckets"), Some("10"));
    }

    #[test]
    fn test_list_objects_max_keys_defaults_to_1000() {
        let req = client().list_objects("b1").build().to_stor_request().unwrap();
        assert_eq!(req.query_params().first_value("max-keys"), Some("1000"));
        assert_eq!(req.query_params().first_value("prefix"), None);

        let req = client()
            .list_objects("b1")
            .max_keys(0)
            .build()
            .to_stor_request()
            .unwrap();
        assert_eq!(req.query_params().first_value("max-keys"), Some("1000"));

        let req = client()
            .list_objects("b1")
            .max_keys(5)
            .prefix("photos/")
            .delimiter("/")
            .start_after("photos/a.jpg")
            .build()
            .to_stor_request()
            .unwrap();
        let query = req.query_params();
        assert_eq!(query.first_value("max-keys"), Some("5"));
        assert_eq!(query.first_value("prefix"), Some("photos/"));
        assert_eq!(query.first_value("delimiter"), Some("/"));
        assert_eq!(query.first_value("start-after"), Some("photos/a.jpg"));
    }

    #[test]
    fn test_invalid_bucket_names_are_rejected_locally() {
        let err = client().delete_bucket("").build().to_stor_request().unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidBucketName(_)));

        let err = client()
            .get_object("a/b", "k")
            .build()
            .to_stor_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidBucketName(_)));

        let err = client()
            .get_object("b1", "")
            .build()
            .to_stor_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidObjectName(_)));
    }

    #[test]
    fn test_put_object_precondition_header() {
        let req = client()
            .put_object("b1", "k", "hello")
            .build()
            .to_stor_request()
            .unwrap();
        assert!(req.headers().is_empty());
        assert_eq!(req.expected_status, StatusCode::NO_CONTENT);

        let req = client()
            .put_object("b1", "k", "hello")
            .content_type("text/plain")
            .if_none_match(true)
            .build()
            .to_stor_request()
            .unwrap();
        assert_eq!(req.headers().first_value("If-None-Match"), Some("*"));
        assert_eq!(req.content_type.as_deref(), Some("text/plain"));
    }

    #[test]
    fn test_get_object_streams_and_maps_404() {
        let req = client().get_object("b1", "k").build().to_stor_request().unwrap();
        assert!(req.streaming);
        assert_eq!(req.not_found, Some(crate::error::StorError::ObjectNotFound));
    }

    #[async_std::test]
    async fn test_delete_objects_body() {
        let mut req = client()
            .delete_objects("b1", ["a.txt", "b.txt"])
            .build()
            .to_stor_request()
            .unwrap();
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.query_params().first_value("delete"), Some(""));
        assert_eq!(
            body_json(&mut req).await,
            serde_json::json!({"objects": [{"key": "a.txt"}, {"key": "b.txt"}]})
        );
    }

    #[test]
    fn test_delete_objects_requires_keys() {
        let keys: Vec<String> = Vec::new();
        let err = client()
            .delete_objects("b1", keys)
            .build()
            .to_stor_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::EmptyList(_)));
    }

    #[test]
    fn test_upload_part_validation() {
        let err = client()
            .upload_part("b1", "k", "upload-1", 0, "data")
            .build()
            .to_stor_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidPartNumber(0)));

        let err = client()
            .upload_part("b1", "k", "", 1, "data")
            .build()
            .to_stor_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidUploadId(_)));

        let req = client()
            .upload_part("b1", "k", "upload-1", 3, "data")
            .build()
            .to_stor_request()
            .unwrap();
        assert_eq!(req.query_params().first_value("upload-id"), Some("upload-1"));
        assert_eq!(req.query_params().first_value("part-number"), Some("3"));
    }

    #[async_std::test]
    async fn test_complete_multipart_upload_body() {
        let parts = vec![PartReference::new(1, "\"e1\""), PartReference::new(2, "\"e2\"")];
        let mut req = client()
            .complete_multipart_upload("b1", "k", "upload-1", parts)
            .build()
            .to_stor_request()
            .unwrap();
        assert_eq!(
            body_json(&mut req).await,
            serde_json::json!({"parts": [
                {"etag": "\"e1\"", "partNumber": 1},
                {"etag": "\"e2\"", "partNumber": 2},
            ]})
        );

        let err = client()
            .complete_multipart_upload("b1", "k", "upload-1", vec![])
            .build()
            .to_stor_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::EmptyList(_)));
    }

    #[test]
    fn test_archive_requests() {
        let req = client()
            .create_archive("b1", "photos.zip")
            .build()
            .to_stor_request()
            .unwrap();
        assert_eq!(req.query_params().first_value("archives"), Some(""));
        assert_eq!(req.query_params().first_value("type"), Some("zip"));

        let err = client()
            .add_archive_entries("b1", "photos.zip", "a-1", vec![])
            .build()
            .to_stor_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::EmptyList(_)));

        let req = client()
            .add_archive_entries(
                "b1",
                "photos.zip",
                "a-1",
                vec![ArchiveEntry::new("photos/1.jpg", "1.jpg")],
            )
            .build()
            .to_stor_request()
            .unwrap();
        assert_eq!(req.method(), &Method::PUT);
        assert_eq!(req.query_params().first_value("archive-id"), Some("a-1"));

        let req = client()
            .complete_archive("b1", "photos.zip", "a-1")
            .build()
            .to_stor_request()
            .unwrap();
        assert_eq!(req.expected_status, StatusCode::NO_CONTENT);

        let req = client()
            .get_archive("b1", "photos.zip", "a-1")
            .build()
            .to_stor_request()
            .unwrap();
        assert_eq!(req.not_found, Some(crate::error::StorError::ArchiveNotFound));
    }

    #[test]
    fn test_create_nonce_ttl() {
        let err = client()
            .create_nonce("b1", "k", Duration::from_millis(500))
            .build()
            .to_stor_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidTtl(_)));

        let req = client()
            .create_nonce("b1", "k", Duration::from_secs(90))
            .build()
            .to_stor_request()
            .unwrap();
        assert_eq!(req.query_params().first_value("ttl"), Some("90"));
        assert_eq!(req.expected_status, StatusCode::CREATED);
    }
}
