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

use bytes::{Bytes, BytesMut};
use stor::error::StorError;
use stor::response::GetObjectResponse;
use stor::types::StorApi;
use stor_common::test_context::TestContext;
use stor_common::utils::rand_object_name;

async fn put(ctx: &TestContext, bucket_name: &str, object_name: &str, data: Bytes) {
    ctx.client
        .put_object(bucket_name, object_name, data)
        .content_type("application/octet-stream")
        .build()
        .send()
        .await
        .unwrap();
}

#[stor_macros::test]
async fn get_object_reads_in_chunks(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name();
    let data = Bytes::from(vec![7u8; 256 * 1024]);
    put(&ctx, &bucket_name, &object_name, data.clone()).await;

    let mut resp: GetObjectResponse = ctx
        .client
        .get_object(&bucket_name, &object_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);
    assert_eq!(resp.object(), object_name);
    assert_eq!(resp.content_type(), Some("application/octet-stream"));
    assert_eq!(resp.content_length(), Some(data.len() as u64));

    let reader = resp.reader();
    let mut got = BytesMut::new();
    while let Some(chunk) = reader.chunk().await.unwrap() {
        got.extend_from_slice(&chunk);
    }
    assert_eq!(got.freeze(), data);
    // reaching the end closes the reader
    assert!(reader.is_closed());
    assert!(reader.chunk().await.unwrap().is_none());
}

#[stor_macros::test]
async fn get_object_close_is_idempotent(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name();
    put(&ctx, &bucket_name, &object_name, Bytes::from(vec![1u8; 64 * 1024])).await;

    let mut resp = ctx
        .client
        .get_object(&bucket_name, &object_name)
        .build()
        .send()
        .await
        .unwrap();
    resp.close();
    resp.close();
    assert!(resp.reader().is_closed());
    assert!(resp.reader().chunk().await.unwrap().is_none());
}

#[stor_macros::test]
async fn get_object_into_bytes_and_file(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name();
    let data = Bytes::from_static(b"hello, file");
    put(&ctx, &bucket_name, &object_name, data.clone()).await;

    let got = ctx
        .client
        .get_object(&bucket_name, &object_name)
        .build()
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    assert_eq!(got, data);

    let path = std::env::temp_dir().join(format!("stor-test-{object_name}"));
    let written = ctx
        .client
        .get_object(&bucket_name, &object_name)
        .build()
        .send()
        .await
        .unwrap()
        .to_file(&path)
        .await
        .unwrap();
    assert_eq!(written, data.len() as u64);
    assert_eq!(std::fs::read(&path).unwrap(), data.as_ref());
    std::fs::remove_file(&path).unwrap();
}

#[stor_macros::test]
async fn get_missing_object(ctx: TestContext, bucket_name: String) {
    let err = ctx
        .client
        .get_object(&bucket_name, "does-not-exist")
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.stor_error(), Some(&StorError::ObjectNotFound));
    assert!(err.is_not_found());
}
