#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use config::{LexerOptions, Locale};
pub use lexer::grammar::{Grammar, PatternSpec, SpecDef};
pub use lexer::interner::{IdentifierTable, Interner, SharedIdentifierTable};
pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::tokens::{Token, TokenClass, TokenLists};

/// A location in the source: byte `offset`, 1-based `line` and `column`.
///
/// Columns count characters (Unicode scalar values) from the start of the
/// line, so multi-byte text earlier on the line does not shift them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position { offset, line, column }
    }

    /// Position not tied to any source text.
    pub fn null() -> Self {
        Position::default()
    }

    pub fn is_null(&self) -> bool {
        self.line == 0
    }
}

/// Newline offsets of a source buffer, computed once.
///
/// Answers [`LineIndex::line_col`] with a binary search instead of rescanning
/// the buffer on every token.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    newlines: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        LineIndex {
            newlines: source.match_indices('\n').map(|(i, _)| i).collect(),
            len: source.len(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.newlines.len() + 1
    }

    /// Byte offset of the first character of `line` (1-based).
    pub fn line_start(&self, line: usize) -> Option<usize> {
        match line {
            0 => None,
            1 => Some(0),
            n => self.newlines.get(n - 2).map(|nl| nl + 1),
        }
    }

    /// Returns `None` when `offset` is outside `[0, len)` or does not fall on a
    /// character boundary of `source`.
    pub fn line_col(&self, source: &str, offset: usize) -> Option<Position> {
        if offset >= self.len {
            return None;
        }

        let line_idx = self.newlines.partition_point(|&nl| nl < offset);
        let start = if line_idx == 0 { 0 } else { self.newlines[line_idx - 1] + 1 };
        let column = source.get(start..offset)?.chars().count() + 1;

        Some(Position::new(offset, line_idx + 1, column))
    }
}

/// Rescans `text` from the start to locate `offset`.
///
/// Same contract as [`LineIndex::line_col`]; kept as the plain reference
/// computation.
pub fn line_col(text: &str, offset: usize) -> Option<(usize, usize)> {
    if offset >= text.len() || !text.is_char_boundary(offset) {
        return None;
    }

    let mut line = 1;
    let mut col = 1;

    for c in text[..offset].chars() {
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    Some((line, col))
}

/// Returns the 1-based line number, the text of that line and the column
/// (0-based, in characters) of `position` inside it.
pub fn get_line_at_position(source: &str, position: &Position) -> Option<(usize, String, usize)> {
    let line = source.lines().nth(position.line.checked_sub(1)?)?;
    Some((position.line, line.to_string(), position.column.saturating_sub(1)))
}


/// Renders `error` the way a terminal diagnostic looks:
///
/// ```text
/// Error: UnrecognisedInput
/// -> main.go
///    |
/// 20 | a := #;
///    | -----^
/// ```
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position()) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
