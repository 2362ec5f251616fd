//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into classified tokens. It handles:
//!
//! - An ordered token table of regex patterns, first match wins
//! - Boundary checks so keywords and constants never match a prefix of a word
//! - Identifier interning, per run or shared between runs
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod grammar;
pub mod interner;
pub mod lexer;
pub mod tokens;
