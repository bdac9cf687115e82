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

use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{FnArg, ItemFn, ReturnType, Type};

#[derive(Debug, FromMeta)]
pub(crate) struct TestArgs {
    /// The body only takes the context; no bucket is created.
    no_bucket: darling::util::Flag,
}

impl TestArgs {
    /// Parameters the body must declare, as (name, type) pairs.
    fn fixtures(&self) -> &'static [(&'static str, &'static str)] {
        if self.no_bucket.is_present() {
            &[("ctx", "TestContext")]
        } else {
            &[("ctx", "TestContext"), ("bucket_name", "String")]
        }
    }
}

fn check_signature(args: &TestArgs, func: &ItemFn) -> darling::Result<()> {
    let sig = &func.sig;
    if sig.asyncness.is_none() {
        return Err(darling::Error::custom("STOR tests must be async").with_span(&sig.fn_token));
    }
    if !matches!(sig.output, ReturnType::Default) {
        return Err(darling::Error::custom("STOR tests cannot return a value").with_span(&sig.output));
    }

    let fixtures = args.fixtures();
    if sig.inputs.len() != fixtures.len() {
        let wanted: Vec<String> = fixtures
            .iter()
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect();
        return Err(
            darling::Error::custom(format!("expected the parameters ({})", wanted.join(", ")))
                .with_span(&sig.ident),
        );
    }

    let mut errors = darling::Error::accumulator();
    for (input, (_, ty)) in sig.inputs.iter().zip(fixtures) {
        let ok = match input {
            FnArg::Typed(param) => is_named_type(&param.ty, ty),
            FnArg::Receiver(_) => false,
        };
        if !ok {
            errors.push(darling::Error::custom(format!("this parameter must be a `{ty}`")).with_span(input));
        }
    }
    errors.finish()
}

fn is_named_type(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(p) => p.path.segments.last().is_some_and(|s| s.ident == name),
        _ => false,
    }
}

/// Turns the annotated fn into a nested body fn driven by a `#[tokio::test]` wrapper.
pub(crate) fn expand(args: TestArgs, func: ItemFn) -> darling::Result<TokenStream> {
    check_signature(&args, &func)?;

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = func;
    let name = &sig.ident;
    let body_fn = format_ident!("{}_body", name);
    let params = &sig.inputs;

    let run = if args.no_bucket.is_present() {
        quote! {
            #body_fn(ctx).await;
        }
    } else {
        quote! {
            let (bucket_name, bucket) = ctx.create_bucket_helper().await;
            let outcome = ::futures_util::FutureExt::catch_unwind(
                ::std::panic::AssertUnwindSafe(#body_fn(ctx, bucket_name)),
            )
            .await;
            bucket.cleanup().await;
            if let Err(panic) = outcome {
                ::std::panic::resume_unwind(panic);
            }
        }
    };

    Ok(quote! {
        #(#attrs)*
        #[::tokio::test]
        #vis async fn #name() {
            async fn #body_fn(#params) #block

            let ctx = ::stor_common::test_context::TestContext::new().await;
            // cleanup runs after the body has dropped the context
            let _server = ::std::sync::Arc::clone(&ctx.server);
            #run
        }
    })
}
