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

//! Test attribute for the STOR integration tests.

mod test_attr;

use darling::FromMeta;
use darling::ast::NestedMeta;
use syn::ItemFn;

/// Runs an async test against a fresh in-process mock STOR server.
///
/// The test receives a `TestContext` bound to its own server and, unless `no_bucket` is
/// given, the name of a bucket created for it. That bucket is emptied and removed once the
/// body has finished, whether it passed or panicked.
///
/// ```no_run
/// use stor_common::test_context::TestContext;
///
/// #[stor_macros::test]
/// async fn upload(ctx: TestContext, bucket_name: String) {
///     // ...
/// }
///
/// #[stor_macros::test(no_bucket)]
/// async fn list(ctx: TestContext) {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let args = match NestedMeta::parse_meta_list(args.into())
        .map_err(darling::Error::from)
        .and_then(|meta| test_attr::TestArgs::from_list(&meta))
    {
        Ok(args) => args,
        Err(e) => return e.write_errors().into(),
    };
    let func = match syn::parse::<ItemFn>(input) {
        Ok(func) => func,
        Err(e) => return e.to_compile_error().into(),
    };

    test_attr::expand(args, func)
        .unwrap_or_else(darling::Error::write_errors)
        .into()
}
