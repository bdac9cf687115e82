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
use stor::builders::{ObjectContent, Size};
use stor::error::{Error, ValidationErr};
use stor::response::PutObjectResponse;
use stor::response_traits::{HasEtagFromHeaders, HasObject};
use stor::types::StorApi;
use stor_common::rand_src::RandSrc;
use stor_common::test_context::TestContext;
use stor_common::utils::{rand_object_name, rand_object_name_in};

#[stor_macros::test]
async fn put_object_from_bytes(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name_in("docs/");
    let data = Bytes::from_static(b"hello, world");

    let resp: PutObjectResponse = ctx
        .client
        .put_object(&bucket_name, &object_name, data.clone())
        .content_type("text/plain")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.object(), object_name);
    assert!(resp.etag().starts_with('"'));

    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.method, http::Method::PUT);
    assert_eq!(req.path, format!("/{bucket_name}/{object_name}"));
    assert_eq!(req.header("content-type"), Some("text/plain"));
    assert_eq!(req.header("if-none-match"), None);
    assert_eq!(req.body, data);
    assert_eq!(ctx.server.object_data(&bucket_name, &object_name), Some(data));
}

#[stor_macros::test]
async fn put_object_from_stream(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name();
    let size = 100 * 1024;
    let content = ObjectContent::new_from_stream(RandSrc::new(size), Size::Known(size));

    ctx.client
        .put_object(&bucket_name, &object_name, content)
        .build()
        .send()
        .await
        .unwrap();

    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.header("content-length"), Some("102400"));
    let stored = ctx.server.object_data(&bucket_name, &object_name).unwrap();
    assert_eq!(stored.len() as u64, size);
}

#[stor_macros::test]
async fn put_object_keys_are_percent_encoded(ctx: TestContext, bucket_name: String) {
    let object_name = "my dir/a b+c.txt";
    ctx.client
        .put_object(&bucket_name, object_name, "data")
        .build()
        .send()
        .await
        .unwrap();

    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.path, format!("/{bucket_name}/my%20dir/a%20b%2Bc.txt"));
    assert!(ctx.server.object_data(&bucket_name, object_name).is_some());
}

#[stor_macros::test]
async fn put_object_if_none_match(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name();
    ctx.client
        .put_object(&bucket_name, &object_name, "first")
        .if_none_match(true)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(
        ctx.server.last_request().unwrap().header("if-none-match"),
        Some("*")
    );

    let err = ctx
        .client
        .put_object(&bucket_name, &object_name, "second")
        .if_none_match(true)
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(err.is_precondition_failed(), "unexpected error: {err:?}");
    assert_eq!(
        ctx.server.object_data(&bucket_name, &object_name),
        Some(Bytes::from_static(b"first"))
    );

    // without the precondition the object is replaced
    ctx.client
        .put_object(&bucket_name, &object_name, "third")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(
        ctx.server.object_data(&bucket_name, &object_name),
        Some(Bytes::from_static(b"third"))
    );
}

#[stor_macros::test]
async fn put_object_rejects_dot_segments(ctx: TestContext, bucket_name: String) {
    let (victim, guard) = ctx.create_bucket_helper().await;
    ctx.server.clear_requests();

    for key in ["../victim/pwned", "a/./b", ".."] {
        let key = key.replace("victim", &victim);
        let err = ctx
            .client
            .put_object(&bucket_name, &key, "data")
            .build()
            .send()
            .await
            .unwrap_err();
        assert!(
            matches!(
                err,
                Error::Validation(ValidationErr::InvalidObjectName(_))
            ),
            "unexpected error for {key}: {err:?}"
        );
    }
    assert!(ctx.server.requests().is_empty());
    assert_eq!(ctx.server.object_data(&victim, "pwned"), None);
    assert_eq!(ctx.server.object_data(&bucket_name, "a/b"), None);

    // dots inside a segment are ordinary characters
    let object_name = ".config/..v2/a..b";
    ctx.client
        .put_object(&bucket_name, object_name, "data")
        .build()
        .send()
        .await
        .unwrap();
    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.path, format!("/{bucket_name}/{object_name}"));
    assert!(ctx.server.object_data(&bucket_name, object_name).is_some());

    guard.cleanup().await;
}
