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

use http::StatusCode;
use stor::error::StorError;
use stor::response::{CreateBucketResponse, ListBucketsResponse};
use stor::response_traits::HasBucket;
use stor::types::StorApi;
use stor_common::test_context::TestContext;
use stor_common::utils::rand_object_name;

#[stor_macros::test(no_bucket)]
async fn create_and_delete_bucket(ctx: TestContext) {
    let resp: CreateBucketResponse = ctx.client.create_bucket("b1").build().send().await.unwrap();
    assert_eq!(resp.bucket(), "b1");
    assert_eq!(resp.bucket_info().name, "b1");
    assert_eq!(resp.bucket_info().objects, 0);
    assert_eq!(resp.bucket_info().size, 0);

    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.method, http::Method::PUT);
    assert_eq!(req.path, "/b1");

    // the name is taken now
    let err = ctx.client.create_bucket("b1").build().send().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::CONFLICT));

    ctx.client.delete_bucket("b1").build().send().await.unwrap();
    assert!(!ctx.server.bucket_exists("b1"));

    let err = ctx.client.delete_bucket("b1").build().send().await.unwrap_err();
    assert_eq!(err.stor_error(), Some(&StorError::NoSuchBucket));
    assert!(err.is_not_found());
}

#[stor_macros::test]
async fn delete_non_empty_bucket(ctx: TestContext, bucket_name: String) {
    ctx.client
        .put_object(&bucket_name, rand_object_name(), "data")
        .build()
        .send()
        .await
        .unwrap();

    let err = ctx
        .client
        .delete_bucket(&bucket_name)
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.stor_error(), Some(&StorError::BucketNotEmpty));
    assert!(ctx.server.bucket_exists(&bucket_name));
}

#[stor_macros::test(no_bucket)]
async fn list_buckets_in_pages(ctx: TestContext) {
    for name in ["alpha", "bravo", "charlie"] {
        ctx.client.create_bucket(name).build().send().await.unwrap();
    }

    let resp: ListBucketsResponse = ctx
        .client
        .list_buckets()
        .max_buckets(2)
        .build()
        .send()
        .await
        .unwrap();
    let names: Vec<&str> = resp.buckets().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["alpha", "bravo"]);
    assert!(resp.is_truncated());

    let resp = ctx
        .client
        .list_buckets()
        .start_after("bravo")
        .build()
        .send()
        .await
        .unwrap();
    let names: Vec<&str> = resp.buckets().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["charlie"]);
    assert!(!resp.is_truncated());

    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.query_value("start-after"), Some("bravo"));
    assert_eq!(req.query_value("max-buckets"), None);
}

#[stor_macros::test]
async fn bucket_counters_follow_uploads(ctx: TestContext, bucket_name: String) {
    ctx.client
        .put_object(&bucket_name, "a.txt", "12345")
        .build()
        .send()
        .await
        .unwrap();

    let resp = ctx.client.list_buckets().build().send().await.unwrap();
    let bucket = resp
        .buckets()
        .iter()
        .find(|b| b.name == bucket_name)
        .unwrap();
    assert_eq!(bucket.objects, 1);
    assert_eq!(bucket.size, 5);
}
