//! # Deedchain Codec
//!
//! Converts a full chain to and from its external JSON representation:
//! a pretty-printed array of block objects, every field a string, in
//! chain order.
//!
//! The codec is a pure serialization boundary. Import checks only the
//! top-level shape (the payload must be a JSON array); it performs no
//! per-block integrity checks. Validity of an imported chain must be
//! re-established explicitly with the validator.

pub mod error;
pub mod json;

pub use error::CodecError;
pub use json::{from_json, to_json};
