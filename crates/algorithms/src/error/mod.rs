//! Error handling for field primitives
//!
//! Field primitives report the shared [`gf2n_api::Error`]; this module
//! re-exports it together with the validation helpers.

pub use gf2n_api::error::{validate, Error, Result};
