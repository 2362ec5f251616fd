//! Error types and error handling for the lexer.
//!
//! This module defines the error types produced while building a token
//! table and while scanning. It includes:
//!
//! - Error structures with source position information
//! - Localised diagnostic messages
//! - Helpful error tips

pub mod errors;
