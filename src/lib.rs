//! Esther - images to 1-bit bitmap literals
//!
//! Decodes a PNG, runs it through the `mono-bitmap` core and renders the
//! packed rows as a brace-delimited hex literal for firmware sources.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
