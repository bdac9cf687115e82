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

use stor::error::StorError;
use stor::response::ListObjectsResponse;
use stor::types::StorApi;
use stor_common::test_context::TestContext;

async fn put_keys(ctx: &TestContext, bucket_name: &str, keys: &[&str]) {
    for key in keys {
        ctx.client
            .put_object(bucket_name, *key, "x")
            .build()
            .send()
            .await
            .unwrap();
    }
}

#[stor_macros::test]
async fn max_keys_zero_is_sent_as_default(ctx: TestContext, bucket_name: String) {
    ctx.client
        .list_objects(&bucket_name)
        .max_keys(0)
        .build()
        .send()
        .await
        .unwrap();

    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.query_value("max-keys"), Some("1000"));
    assert_eq!(req.query_value("prefix"), None);
    assert_eq!(req.query_value("delimiter"), None);
    assert_eq!(req.query_value("start-after"), None);
}

#[stor_macros::test]
async fn list_objects_in_pages(ctx: TestContext, bucket_name: String) {
    put_keys(&ctx, &bucket_name, &["a", "b", "c", "d", "e"]).await;

    let mut seen = Vec::new();
    // an empty start_after is not sent, so the first page starts at the beginning
    let mut start_after = String::new();
    loop {
        let resp: ListObjectsResponse = ctx
            .client
            .list_objects(&bucket_name)
            .max_keys(2)
            .start_after(start_after.clone())
            .build()
            .send()
            .await
            .unwrap();
        seen.extend(resp.objects().iter().map(|o| o.key.clone()));
        match resp.next_start_after() {
            Some(key) => start_after = key.to_string(),
            None => break,
        }
    }
    assert_eq!(seen, ["a", "b", "c", "d", "e"]);
}

#[stor_macros::test]
async fn list_objects_with_prefix_and_delimiter(ctx: TestContext, bucket_name: String) {
    put_keys(
        &ctx,
        &bucket_name,
        &["photos/2024/a.jpg", "photos/2025/b.jpg", "photos/c.jpg", "readme.txt"],
    )
    .await;

    let resp = ctx
        .client
        .list_objects(&bucket_name)
        .prefix("photos/")
        .delimiter("/")
        .build()
        .send()
        .await
        .unwrap();
    let keys: Vec<&str> = resp.objects().iter().map(|o| o.key.as_str()).collect();
    assert_eq!(keys, ["photos/c.jpg"]);
    assert_eq!(resp.common_prefixes(), ["photos/2024/", "photos/2025/"]);
    assert!(!resp.is_truncated());
    assert_eq!(resp.result().key_count, 1);
    assert_eq!(resp.result().max_keys, 1000);
}

#[stor_macros::test(no_bucket)]
async fn list_objects_in_missing_bucket(ctx: TestContext) {
    let err = ctx
        .client
        .list_objects("no-such-bucket")
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.stor_error(), Some(&StorError::NoSuchBucket));
}

#[stor_macros::test]
async fn prefix_with_spaces_is_encoded(ctx: TestContext, bucket_name: String) {
    put_keys(&ctx, &bucket_name, &["my photos/a b.jpg", "other.jpg"]).await;

    let resp = ctx
        .client
        .list_objects(&bucket_name)
        .prefix("my photos/")
        .build()
        .send()
        .await
        .unwrap();
    let keys: Vec<&str> = resp.objects().iter().map(|o| o.key.as_str()).collect();
    assert_eq!(keys, ["my photos/a b.jpg"]);

    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.query_value("prefix"), Some("my photos/"));
}
