//! Typed query and form parameter encoding for REST clients.
//!
//! Annotate a plain struct, derive [`Params`], and encode it into a flat
//! [`ParamSet`] ready for a URL query string or an
//! `application/x-www-form-urlencoded` body.
//!
//! # Example
//!
//! ```
//! use tankard::prelude::*;
//!
//! #[derive(Params)]
//! struct BeerQuery {
//!     #[param(omit_empty)]
//!     name: String,
//!     #[param(rename = "abv", omit_empty)]
//!     abv_range: String,
//!     #[param(rename = "p")]
//!     page: u32,
//! }
//!
//! let query = BeerQuery {
//!     name: String::new(),
//!     abv_range: "8".to_string(),
//!     page: 1,
//! };
//!
//! let params = encode(&query);
//! assert_eq!(params.get("abv"), Some("8"));
//! assert_eq!(params.get("p"), Some("1"));
//! assert!(!params.contains_key("name"));
//!
//! assert_eq!(to_query_string(&query).expect("serialize"), "abv=8&p=1");
//! ```

pub mod prelude;

// Re-export core types
pub use tankard_core::{
    Error, Field, ParamSet, Record, Result, ToValue, Value, encode, encode_json, to_form,
    to_query_string,
};

// Re-export macros
pub use tankard_macro::Params;
