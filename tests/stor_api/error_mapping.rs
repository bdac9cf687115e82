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
use stor::error::{Error, ServerError, StorError};
use stor::types::StorApi;
use stor_common::test_context::TestContext;

#[stor_macros::test(no_bucket)]
async fn unknown_failure_keeps_status_and_body(ctx: TestContext) {
    ctx.server
        .fail_next(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded");

    let err = ctx.client.list_buckets().build().send().await.unwrap_err();
    match err {
        Error::Server(ServerError::HttpError(status, body)) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        e => panic!("unexpected error: {e:?}"),
    }
}

#[stor_macros::test(no_bucket)]
async fn recognized_codes_map_to_domain_errors(ctx: TestContext) {
    ctx.server.fail_next(
        StatusCode::CONFLICT,
        r#"{"code":"BucketNotEmpty","message":"still has objects"}"#,
    );
    let err = ctx.client.delete_bucket("b1").build().send().await.unwrap_err();
    assert_eq!(err.stor_error(), Some(&StorError::BucketNotEmpty));

    ctx.server.fail_next(StatusCode::CONFLICT, r#"{"code":"SlowDown"}"#);
    let err = ctx.client.delete_bucket("b1").build().send().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::CONFLICT));
}

#[stor_macros::test(no_bucket)]
async fn not_found_on_get_wins_over_the_error_body(ctx: TestContext) {
    ctx.server
        .fail_next(StatusCode::NOT_FOUND, r#"{"code":"NoSuchBucket"}"#);
    let err = ctx
        .client
        .get_object("b1", "k")
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.stor_error(), Some(&StorError::ObjectNotFound));

    // other operations still read the body
    ctx.server
        .fail_next(StatusCode::NOT_FOUND, r#"{"code":"NoSuchBucket"}"#);
    let err = ctx.client.list_objects("b1").build().send().await.unwrap_err();
    assert_eq!(err.stor_error(), Some(&StorError::NoSuchBucket));
}

#[stor_macros::test(no_bucket)]
async fn malformed_success_body_is_a_decode_error(ctx: TestContext) {
    ctx.server.fail_next(StatusCode::OK, "this is not json");
    let err = ctx.client.list_buckets().build().send().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "unexpected error: {err:?}");
}

#[stor_macros::test(no_bucket)]
async fn success_needs_the_exact_status(ctx: TestContext) {
    // create_bucket expects 201
    ctx.server.fail_next(StatusCode::OK, "{}");
    let err = ctx.client.create_bucket("b1").build().send().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::OK));
}

#[stor_macros::test(no_bucket)]
async fn validation_errors_never_reach_the_server(ctx: TestContext) {
    let err = ctx.client.create_bucket("").build().send().await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(ctx.server.requests().is_empty());
}

#[stor_macros::test(no_bucket)]
async fn streamed_read_failures_are_generic(ctx: TestContext) {
    let body = r#"{"code":"InvalidCredentials","message":"bad key"}"#;
    ctx.server.fail_next(StatusCode::FORBIDDEN, body);
    let err = ctx
        .client
        .get_object("b1", "k")
        .build()
        .send()
        .await
        .unwrap_err();
    match err {
        Error::Server(ServerError::HttpError(status, text)) => {
            assert_eq!(status, 403);
            assert_eq!(text, body);
        }
        e => panic!("unexpected error: {e:?}"),
    }

    // the same body maps on a buffered call
    ctx.server.fail_next(StatusCode::FORBIDDEN, body);
    let err = ctx.client.list_objects("b1").build().send().await.unwrap_err();
    assert_eq!(err.stor_error(), Some(&StorError::InvalidCredentials));
}
