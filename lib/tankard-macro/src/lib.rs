//! Procedural macros for tankard typed parameter encoding.
//!
//! This crate provides `#[derive(Params)]`, which implements the
//! `tankard::Record` trait by building a static field descriptor table from
//! the struct's fields and their `#[param(...)]` annotations.

mod params_derive;

use proc_macro::TokenStream;

/// Derive the `Record` trait for a struct.
///
/// The generated impl exposes a static field descriptor table consumed by
/// `tankard::encode`. Fields appear in declaration order.
///
/// # Struct Attributes
///
/// - `#[param(rename_all = "camelCase")]` - Rename all keys using a case
///   convention
///
/// Supported case conventions: `lowercase`, `UPPERCASE`, `snake_case`,
/// `camelCase`, `PascalCase`, `kebab-case`.
///
/// # Field Attributes
///
/// - `#[param(rename = "name")]` - External key (overrides `rename_all`).
///   Tag-style shorthand is honored: `rename = "abv,omitempty"` strips the
///   trailing modifier from the name token and sets the omit flag. An empty
///   name token falls back to the field identifier.
/// - `#[param(omit_empty)]` - Skip the field when it holds its kind's zero
///   value (empty string or sequence, `false`, numeric 0, unwrapped optional)
/// - `#[param(skip)]` - Exclude the field from encoding entirely
///
/// # Example
///
/// ```ignore
/// use tankard::Params;
///
/// #[derive(Params)]
/// #[param(rename_all = "camelCase")]
/// struct BeerQuery {
///     #[param(omit_empty)]
///     name: String,              // key "name", omitted when empty
///     #[param(rename = "abv,omitempty")]
///     abv_range: String,         // key "abv", omitted when empty
///     #[param(rename = "p")]
///     page: u32,                 // key "p", always encoded
///     glassware_id: Option<u32>, // key "glasswareId", absent when None
///     #[param(skip)]
///     api_key: String,           // never encoded
/// }
/// ```
#[proc_macro_derive(Params, attributes(param))]
pub fn derive_params(input: TokenStream) -> TokenStream {
    params_derive::expand_params_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
