//! Utility macros for the lexer.
//!
//! This module defines helper macros used to build tokens and token tables:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPEC!` - Creates a token table entry
//!
//! These macros reduce boilerplate in the grammar definitions.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The kind name (pattern name, plus the id for identifiers)
/// * `$text` - The matched lexeme
/// * `$class` - The TokenClass
/// * `$position` - Where the lexeme starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!("int_lit".to_string(), "42".to_string(), TokenClass::Constant, position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $class:expr, $position:expr) => {
        Token {
            kind: $kind,
            text: $text,
            class: $class,
            position: $position,
        }
    };
}

/// Creates a token table entry.
///
/// With a single literal the entry matches that exact text and is named
/// after it. With a name and a pattern the pattern is a regular expression.
///
/// # Example
///
/// ```ignore
/// let defs = vec![
///     MK_SPEC!(Keyword, "if"),
///     MK_SPEC!(Operator, "+="),
///     MK_SPEC!(Constant, "int_lit", r"\d+"),
/// ];
/// ```
#[macro_export]
macro_rules! MK_SPEC {
    ($class:ident, $literal:literal) => {
        $crate::lexer::grammar::SpecDef::literal($literal, $crate::lexer::tokens::TokenClass::$class)
    };
    ($class:ident, $name:literal, $pattern:literal) => {
        $crate::lexer::grammar::SpecDef::new(
            $name,
            $pattern,
            $crate::lexer::tokens::TokenClass::$class,
        )
    };
}
