//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, functions, and macros
//! for easy glob importing:
//!
//! ```ignore
//! use tankard::prelude::*;
//! ```

pub use crate::{
    Error, Field, ParamSet, Params, Record, Result, ToValue, Value, encode, encode_json, to_form,
    to_query_string,
};
