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
use stor::error::StorError;
use stor::response::{CreateArchiveResponse, GetArchiveResponse};
use stor::types::{ArchiveEntry, ArchiveState, StorApi};
use stor_common::test_context::TestContext;

async fn start_archive(ctx: &TestContext, bucket_name: &str, object_name: &str) -> String {
    let resp: CreateArchiveResponse = ctx
        .client
        .create_archive(bucket_name, object_name)
        .build()
        .send()
        .await
        .unwrap();
    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.query_value("archives"), Some(""));
    assert_eq!(req.query_value("type"), Some("zip"));
    resp.archive_id().to_string()
}

#[stor_macros::test]
async fn build_archive(ctx: TestContext, bucket_name: String) {
    for key in ["photos/1.jpg", "photos/2.jpg"] {
        ctx.client
            .put_object(&bucket_name, key, "jpeg")
            .build()
            .send()
            .await
            .unwrap();
    }
    let archive_id = start_archive(&ctx, &bucket_name, "photos.zip").await;

    let resp: GetArchiveResponse = ctx
        .client
        .get_archive(&bucket_name, "photos.zip", &archive_id)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.archive_id(), archive_id);
    assert_eq!(resp.state(), ArchiveState::Pending);
    assert!(!resp.state().is_terminal());

    ctx.client
        .add_archive_entries(
            &bucket_name,
            "photos.zip",
            &archive_id,
            vec![
                ArchiveEntry::new("photos/1.jpg", "1.jpg"),
                ArchiveEntry::new("photos/2.jpg", "2.jpg"),
            ],
        )
        .build()
        .send()
        .await
        .unwrap();
    let req = ctx.server.last_request().unwrap();
    let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
    assert_eq!(body["entries"][1]["name"], "2.jpg");

    ctx.client
        .complete_archive(&bucket_name, "photos.zip", &archive_id)
        .build()
        .send()
        .await
        .unwrap();

    let resp = ctx
        .client
        .get_archive(&bucket_name, "photos.zip", &archive_id)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.state(), ArchiveState::Complete);
    assert_eq!(resp.result().archive_type, "zip");

    let obj = ctx
        .client
        .get_object(&bucket_name, "photos.zip")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(obj.content_type(), Some("application/zip"));
}

#[stor_macros::test]
async fn abort_archive(ctx: TestContext, bucket_name: String) {
    let archive_id = start_archive(&ctx, &bucket_name, "out.zip").await;
    ctx.client
        .abort_archive(&bucket_name, "out.zip", &archive_id)
        .build()
        .send()
        .await
        .unwrap();

    let err = ctx
        .client
        .get_archive(&bucket_name, "out.zip", &archive_id)
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.stor_error(), Some(&StorError::ArchiveNotFound));

    let err = ctx
        .client
        .complete_archive(&bucket_name, "out.zip", &archive_id)
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.stor_error(), Some(&StorError::ArchiveNotFound));
}

#[stor_macros::test]
async fn unknown_archive_state_is_tolerated(ctx: TestContext, bucket_name: String) {
    let archive_id = start_archive(&ctx, &bucket_name, "out.zip").await;
    ctx.server.set_archive_state(&archive_id, "compressing");

    let resp = ctx
        .client
        .get_archive(&bucket_name, "out.zip", &archive_id)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.state(), ArchiveState::Unknown);

    ctx.server.set_archive_state(&archive_id, "failed");
    let resp = ctx
        .client
        .get_archive(&bucket_name, "out.zip", &archive_id)
        .build()
        .send()
        .await
        .unwrap();
    assert!(resp.state().is_terminal());
}

#[stor_macros::test]
async fn complete_archive_if_none_match(ctx: TestContext, bucket_name: String) {
    ctx.client
        .put_object(&bucket_name, "bundle.zip", "existing")
        .build()
        .send()
        .await
        .unwrap();
    let archive_id = start_archive(&ctx, &bucket_name, "bundle.zip").await;

    let err = ctx
        .client
        .complete_archive(&bucket_name, "bundle.zip", &archive_id)
        .if_none_match(true)
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(err.is_precondition_failed(), "unexpected error: {err:?}");
    assert_eq!(
        ctx.server.last_request().unwrap().header("if-none-match"),
        Some("*")
    );
    assert_eq!(
        ctx.server.object_data(&bucket_name, "bundle.zip"),
        Some(Bytes::from_static(b"existing"))
    );

    // the archive is still pending and completes without the precondition
    ctx.client
        .complete_archive(&bucket_name, "bundle.zip", &archive_id)
        .build()
        .send()
        .await
        .unwrap();
    let resp = ctx
        .client
        .get_archive(&bucket_name, "bundle.zip", &archive_id)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.state(), ArchiveState::Complete);
}
