//! Core types for tankard typed parameter encoding.
//!
//! This crate provides the foundational types used by tankard:
//! - [`Value`] - Closed sum type over the encodable value kinds
//! - [`ToValue`] - Conversion of ordinary Rust types into [`Value`]
//! - [`Field`] - Static per-field descriptor (key, omit flag, accessor)
//! - [`Record`] - Trait exposing a type's field descriptor table
//! - [`ParamSet`] - The encoded parameter set
//! - [`Error`] and [`Result`] - Error handling
//! - [`encode`], [`encode_json`], [`to_query_string`], [`to_form`] - Encoding
//!   entry points

mod encode;
mod error;
mod field;
mod params;
pub mod prelude;
mod value;

pub use encode::{encode, encode_json, to_form, to_query_string};
pub use error::{Error, Result};
pub use field::Field;
pub use params::ParamSet;
pub use value::{ToValue, Value};

/// Trait for types encodable into a [`ParamSet`].
///
/// This is automatically implemented by the `#[derive(Params)]` macro, which
/// builds the descriptor table from the struct's fields and `#[param(...)]`
/// annotations.
///
/// # Example
///
/// ```ignore
/// use tankard::Params;
///
/// #[derive(Params)]
/// struct BeerQuery {
///     #[param(omit_empty)]
///     name: String,
///     #[param(rename = "abv", omit_empty)]
///     abv_range: String,
///     #[param(rename = "p")]
///     page: u32,
///     #[param(skip)]
///     api_key: String,
/// }
/// ```
pub trait Record: Sized + 'static {
    /// Field descriptors in declaration order. Excluded fields never appear.
    const FIELDS: &'static [Field<Self>];
}
