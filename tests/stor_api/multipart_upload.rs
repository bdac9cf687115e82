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

use bytes::Bytes;
use http::StatusCode;
use stor::response::{CompleteMultipartUploadResponse, CreateMultipartUploadResponse};
use stor::response_traits::HasEtagFromHeaders;
use stor::types::{PartReference, StorApi};
use stor_common::test_context::TestContext;
use stor_common::utils::rand_object_name;

async fn start_upload(ctx: &TestContext, bucket_name: &str, object_name: &str) -> String {
    let resp: CreateMultipartUploadResponse = ctx
        .client
        .create_multipart_upload(bucket_name, object_name)
        .content_type("video/mp4")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.result().key, object_name);
    resp.upload_id().to_string()
}

#[stor_macros::test]
async fn multipart_upload_assembles_parts(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name();
    let upload_id = start_upload(&ctx, &bucket_name, &object_name).await;

    let mut parts = Vec::new();
    for (number, data) in [(1u32, "hello, "), (2, "multipart "), (3, "world")] {
        let resp = ctx
            .client
            .upload_part(&bucket_name, &object_name, &upload_id, number, data)
            .build()
            .send()
            .await
            .unwrap();
        assert_eq!(resp.part_number(), number);
        assert_eq!(resp.part_reference().etag, resp.etag());
        parts.push(resp.part_reference());
    }

    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.query_value("upload-id"), Some(upload_id.as_str()));
    assert_eq!(req.query_value("part-number"), Some("3"));

    let resp: CompleteMultipartUploadResponse = ctx
        .client
        .complete_multipart_upload(&bucket_name, &object_name, &upload_id, parts)
        .build()
        .send()
        .await
        .unwrap();
    assert!(!resp.etag().is_empty());
    assert_eq!(
        ctx.server.object_data(&bucket_name, &object_name),
        Some(Bytes::from_static(b"hello, multipart world"))
    );
    assert_eq!(ctx.server.upload_count(), 0);
}

#[stor_macros::test]
async fn abort_multipart_upload(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name();
    let upload_id = start_upload(&ctx, &bucket_name, &object_name).await;
    ctx.client
        .upload_part(&bucket_name, &object_name, &upload_id, 1, "data")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(ctx.server.upload_count(), 1);

    ctx.client
        .abort_multipart_upload(&bucket_name, &object_name, &upload_id)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(ctx.server.upload_count(), 0);
    assert!(ctx.server.object_data(&bucket_name, &object_name).is_none());

    let err = ctx
        .client
        .abort_multipart_upload(&bucket_name, &object_name, &upload_id)
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[stor_macros::test]
async fn complete_with_wrong_etag_is_rejected(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name();
    let upload_id = start_upload(&ctx, &bucket_name, &object_name).await;
    ctx.client
        .upload_part(&bucket_name, &object_name, &upload_id, 1, "data")
        .build()
        .send()
        .await
        .unwrap();

    let err = ctx
        .client
        .complete_multipart_upload(
            &bucket_name,
            &object_name,
            &upload_id,
            vec![PartReference::new(1, "\"bogus\"")],
        )
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    // the upload survives a failed completion
    assert_eq!(ctx.server.upload_count(), 1);
}

#[stor_macros::test]
async fn complete_if_none_match(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name();
    ctx.client
        .put_object(&bucket_name, &object_name, "existing")
        .build()
        .send()
        .await
        .unwrap();

    let upload_id = start_upload(&ctx, &bucket_name, &object_name).await;
    let part = ctx
        .client
        .upload_part(&bucket_name, &object_name, &upload_id, 1, "new")
        .build()
        .send()
        .await
        .unwrap()
        .part_reference();

    let err = ctx
        .client
        .complete_multipart_upload(&bucket_name, &object_name, &upload_id, vec![part])
        .if_none_match(true)
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(err.is_precondition_failed(), "unexpected error: {err:?}");
    assert_eq!(
        ctx.server.object_data(&bucket_name, &object_name),
        Some(Bytes::from_static(b"existing"))
    );
}
