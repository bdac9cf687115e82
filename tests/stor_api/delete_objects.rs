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

use stor::response::DeleteObjectsResponse;
use stor::types::{ObjectReference, StorApi};
use stor_common::test_context::TestContext;

#[stor_macros::test]
async fn delete_objects_reports_per_key_results(ctx: TestContext, bucket_name: String) {
    for key in ["a.txt", "b.txt"] {
        ctx.client
            .put_object(&bucket_name, key, "data")
            .build()
            .send()
            .await
            .unwrap();
    }

    let resp: DeleteObjectsResponse = ctx
        .client
        .delete_objects(&bucket_name, ["a.txt", "missing.txt", "b.txt"])
        .build()
        .send()
        .await
        .unwrap();

    let results = resp.results();
    assert_eq!(results.len(), 3);
    assert!(results[0].deleted);
    assert!(results[2].deleted);

    let errors: Vec<_> = resp.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key, "missing.txt");
    assert_eq!(errors[0].error.as_ref().unwrap().code, "NoSuchKey");

    assert!(ctx.server.object_data(&bucket_name, "a.txt").is_none());
    assert!(ctx.server.object_data(&bucket_name, "b.txt").is_none());

    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.query_value("delete"), Some(""));
    assert_eq!(req.header("content-type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
    assert_eq!(body["objects"][1]["key"], "missing.txt");
}

#[stor_macros::test]
async fn delete_objects_accepts_references(ctx: TestContext, bucket_name: String) {
    ctx.client
        .put_object(&bucket_name, "dir/x", "data")
        .build()
        .send()
        .await
        .unwrap();

    let keys = vec![ObjectReference::from("dir/x")];
    let resp = ctx
        .client
        .delete_objects(&bucket_name, keys)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.errors().count(), 0);
}
