#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace: error enums,
//! feature slices, REST models/handlers and the runtime entry point.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! whub-derive.workspace = true
//! ```
//!
//! Examples below are `ignore`d because a proc-macro crate cannot use its own
//! macros; the consuming crates carry the compiled equivalents in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the Tokio runtime for an `async fn main`.
///
/// # Arguments
///
/// * `high_performance` - Server profile (larger stacks, long keep-alive).
/// * `memory_efficient` - Client/CLI profile (half the workers, smaller stacks).
/// * `default` - Worker threads auto-detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[whub_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Defines a REST data transfer object.
///
/// * Adds `Debug`, `Serialize` and `Deserialize` unless already derived.
/// * Adds `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// * Applies `rename_all = "camelCase"` and `deny_unknown_fields` unless overridden.
///
/// ```rust,ignore
/// #[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct PositionList {
///     pub positions: Vec<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Bridges an Axum handler with its `OpenAPI` description.
///
/// Accepts the usual `utoipa::path` arguments (`get`, `path = "..."`,
/// `responses(...)`, `tag = ...`) and forwards them when the `server` feature
/// of the consuming crate is enabled.
///
/// ```rust,ignore
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)), tag = SYSTEM_TAG)]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum into a workspace error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant that wraps a source.
/// * `From<SourceError>` for variants with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-private `format_context` helper used by the `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields; variants with a source must carry
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// #[whub_error]
/// pub enum CatalogError {
///     #[error("Product type not found{}: {message}", format_context(.context))]
///     NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal catalog error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn whub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`,
/// derefs to it, implements `FeatureSlice` and converts into an
/// `InitializedSlice` for registration in the API state.
///
/// ```rust,ignore
/// #[whub_derive::whub_slice]
/// pub struct Catalog {
///     pub exclusivity: ExclusivityMode,
/// }
///
/// let slice: InitializedSlice = Catalog::new(CatalogInner { exclusivity }).into();
/// ```
#[proc_macro_attribute]
pub fn whub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
