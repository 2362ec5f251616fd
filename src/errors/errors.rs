use std::fmt::Display;

use thiserror::Error;

use crate::{config::Locale, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Offending text for scan errors, empty for any other kind.
    pub fn snippet(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedInput { snippet } => snippet,
            ErrorImpl::InvalidPattern { .. } => "",
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedInput { .. } => "UnrecognisedInput",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedInput { snippet } if snippet.is_empty() => ErrorTip::None,
            ErrorImpl::UnrecognisedInput { snippet } => ErrorTip::Suggestion(format!(
                "No token pattern matches the start of `{}`",
                snippet
            )),
            ErrorImpl::InvalidPattern { name, .. } => ErrorTip::Suggestion(format!(
                "Check the regular expression of token `{}`",
                name
            )),
        }
    }

    /// The diagnostic sentence in the given locale.
    pub fn message(&self, locale: Locale) -> String {
        match (&self.internal_error, locale) {
            (ErrorImpl::UnrecognisedInput { snippet }, Locale::En) => format!(
                "unrecognised input at line {}, column {}: {}",
                self.position.line, self.position.column, snippet
            ),
            (ErrorImpl::UnrecognisedInput { snippet }, Locale::Ru) => format!(
                "ошибка на позиции {} {}: {}",
                self.position.line, self.position.column, snippet
            ),
            (ErrorImpl::InvalidPattern { name, message }, Locale::En) => {
                format!("invalid pattern for token {:?}: {}", name, message)
            }
            (ErrorImpl::InvalidPattern { name, message }, Locale::Ru) => {
                format!("некорректный шаблон токена {:?}: {}", name, message)
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message(Locale::En))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised input: {snippet:?}")]
    UnrecognisedInput { snippet: String },
    #[error("invalid pattern for token {name:?}: {message}")]
    InvalidPattern { name: String, message: String },
}
