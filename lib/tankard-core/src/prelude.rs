//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use tankard_core::prelude::*;
//! ```

pub use crate::{
    Error, Field, ParamSet, Record, Result, ToValue, Value, encode, encode_json, to_form,
    to_query_string,
};
