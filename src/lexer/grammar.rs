use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenClass,
    Position, MK_SPEC,
};

/// Uncompiled table entry: token name, regular expression and class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDef {
    pub name: String,
    pub pattern: String,
    pub class: TokenClass,
}

impl SpecDef {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, class: TokenClass) -> Self {
        SpecDef {
            name: name.into(),
            pattern: pattern.into(),
            class,
        }
    }

    /// Entry matching exactly `literal`, named after it.
    pub fn literal(literal: &str, class: TokenClass) -> Self {
        SpecDef::new(literal, regex::escape(literal), class)
    }
}

impl<N: Into<String>, P: Into<String>> From<(N, P, TokenClass)> for SpecDef {
    fn from((name, pattern, class): (N, P, TokenClass)) -> Self {
        SpecDef::new(name, pattern, class)
    }
}

#[derive(Debug, Clone)]
pub struct PatternSpec {
    pub name: String,
    pub class: TokenClass,
    regex: Regex,
}

impl PatternSpec {
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// A spec accepted at the current position and the length of its lexeme.
#[derive(Debug, Clone, Copy)]
pub struct Match<'g> {
    pub spec: &'g PatternSpec,
    pub len: usize,
}

/// Ordered token table. The first spec that matches wins; there is no
/// longest-match rule, so multi-character operators and literal keywords
/// must come before their prefixes and before the identifier pattern.
#[derive(Debug, Clone)]
pub struct Grammar {
    specs: Vec<PatternSpec>,
}

fn anchored(pattern: &str) -> String {
    format!("^(?:{})", pattern)
}

impl Grammar {
    pub fn new<I, D>(defs: I) -> Result<Grammar, Error>
    where
        I: IntoIterator<Item = D>,
        D: Into<SpecDef>,
    {
        let mut specs = vec![];

        for def in defs {
            let def = def.into();
            let regex = Regex::new(&anchored(&def.pattern)).map_err(|err| {
                Error::new(
                    ErrorImpl::InvalidPattern {
                        name: def.name.clone(),
                        message: err.to_string(),
                    },
                    Position::null(),
                )
            })?;

            specs.push(PatternSpec {
                name: def.name,
                class: def.class,
                regex,
            });
        }

        Ok(Grammar { specs })
    }

    /// The built-in table for Go source.
    pub fn go() -> &'static Grammar {
        &GO_GRAMMAR
    }

    pub fn specs(&self) -> &[PatternSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Tries every spec in table order against the start of `rest`.
    ///
    /// An empty match counts as no match. A keyword or constant whose match
    /// is followed by a word character is rejected and the scan moves on to
    /// the next spec.
    pub fn match_at(&self, rest: &str) -> Option<Match<'_>> {
        for spec in &self.specs {
            let Some(found) = spec.regex.find(rest) else {
                continue;
            };

            if found.is_empty() {
                continue;
            }

            if spec.class.needs_boundary() && !at_boundary(&rest[found.end()..]) {
                trace!("{} {:?} rejected: followed by a word character", spec.class, spec.name);
                continue;
            }

            return Some(Match { spec, len: found.end() });
        }

        None
    }
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True at end of input or before a non-word character.
pub fn at_boundary(after: &str) -> bool {
    after.chars().next().map_or(true, |c| !is_word_char(c))
}

pub fn go_specs() -> Vec<SpecDef> {
    vec![
        MK_SPEC!(Skip, "whitespace", r"\s+"),
        MK_SPEC!(Skip, "line_comment", r"//[^\n]*"),
        MK_SPEC!(Skip, "block_comment", r"(?s)/\*.*?\*/"),

        MK_SPEC!(Keyword, "break"),
        MK_SPEC!(Keyword, "case"),
        MK_SPEC!(Keyword, "chan"),
        MK_SPEC!(Keyword, "const"),
        MK_SPEC!(Keyword, "continue"),
        MK_SPEC!(Keyword, "default"),
        MK_SPEC!(Keyword, "defer"),
        MK_SPEC!(Keyword, "else"),
        MK_SPEC!(Keyword, "fallthrough"),
        MK_SPEC!(Keyword, "for"),
        MK_SPEC!(Keyword, "func"),
        MK_SPEC!(Keyword, "goto"),
        MK_SPEC!(Keyword, "go"),
        MK_SPEC!(Keyword, "if"),
        MK_SPEC!(Keyword, "import"),
        MK_SPEC!(Keyword, "interface"),
        MK_SPEC!(Keyword, "map"),
        MK_SPEC!(Keyword, "package"),
        MK_SPEC!(Keyword, "range"),
        MK_SPEC!(Keyword, "return"),
        MK_SPEC!(Keyword, "select"),
        MK_SPEC!(Keyword, "struct"),
        MK_SPEC!(Keyword, "switch"),
        MK_SPEC!(Keyword, "type"),
        MK_SPEC!(Keyword, "var"),

        MK_SPEC!(Constant, "true"),
        MK_SPEC!(Constant, "false"),
        MK_SPEC!(Constant, "nil"),
        MK_SPEC!(Constant, "iota"),
        MK_SPEC!(
            Constant,
            "imaginary_lit",
            r"(?:\d[\d_]*(?:\.[\d_]*)?(?:[eE][+-]?\d[\d_]*)?|\.\d[\d_]*(?:[eE][+-]?\d[\d_]*)?)i"
        ),
        MK_SPEC!(
            Constant,
            "float_lit",
            r"0[xX][_\da-fA-F]*\.?[_\da-fA-F]*[pP][+-]?\d[\d_]*|\d[\d_]*\.[\d_]*(?:[eE][+-]?\d[\d_]*)?|\d[\d_]*[eE][+-]?\d[\d_]*|\.\d[\d_]*(?:[eE][+-]?\d[\d_]*)?"
        ),
        MK_SPEC!(Constant, "int_lit", r"0[xX][_\da-fA-F]+|0[bB][_01]+|0[oO]?[_0-7]+|\d[\d_]*"),
        MK_SPEC!(
            Constant,
            "rune_lit",
            r#"'(?:\\(?:[abfnrtv\\'"]|[0-7]{3}|x[[:xdigit:]]{2}|u[[:xdigit:]]{4}|U[[:xdigit:]]{8})|[^'\\\n])'"#
        ),
        MK_SPEC!(Constant, "string_lit", r#""(?:[^"\\\n]|\\.)*""#),
        MK_SPEC!(Constant, "raw_string_lit", r"`[^`]*`"),

        MK_SPEC!(Operator, "<<="),
        MK_SPEC!(Operator, ">>="),
        MK_SPEC!(Operator, "&^="),
        MK_SPEC!(Operator, "+="),
        MK_SPEC!(Operator, "-="),
        MK_SPEC!(Operator, "*="),
        MK_SPEC!(Operator, "/="),
        MK_SPEC!(Operator, "%="),
        MK_SPEC!(Operator, "&="),
        MK_SPEC!(Operator, "|="),
        MK_SPEC!(Operator, "^="),
        MK_SPEC!(Operator, "<<"),
        MK_SPEC!(Operator, ">>"),
        MK_SPEC!(Operator, "&^"),
        MK_SPEC!(Operator, "&&"),
        MK_SPEC!(Operator, "||"),
        MK_SPEC!(Operator, "<-"),
        MK_SPEC!(Operator, "++"),
        MK_SPEC!(Operator, "--"),
        MK_SPEC!(Operator, "=="),
        MK_SPEC!(Operator, "!="),
        MK_SPEC!(Operator, "<="),
        MK_SPEC!(Operator, ">="),
        MK_SPEC!(Operator, ":="),
        MK_SPEC!(Operator, "="),
        MK_SPEC!(Operator, "+"),
        MK_SPEC!(Operator, "-"),
        MK_SPEC!(Operator, "*"),
        MK_SPEC!(Operator, "/"),
        MK_SPEC!(Operator, "%"),
        MK_SPEC!(Operator, "&"),
        MK_SPEC!(Operator, "|"),
        MK_SPEC!(Operator, "^"),
        MK_SPEC!(Operator, "~"),
        MK_SPEC!(Operator, "!"),
        MK_SPEC!(Operator, "<"),
        MK_SPEC!(Operator, ">"),

        MK_SPEC!(Punctuation, "..."),
        MK_SPEC!(Punctuation, "("),
        MK_SPEC!(Punctuation, ")"),
        MK_SPEC!(Punctuation, "["),
        MK_SPEC!(Punctuation, "]"),
        MK_SPEC!(Punctuation, "{"),
        MK_SPEC!(Punctuation, "}"),
        MK_SPEC!(Punctuation, ","),
        MK_SPEC!(Punctuation, ";"),
        MK_SPEC!(Punctuation, ":"),
        MK_SPEC!(Punctuation, "."),

        MK_SPEC!(Id, "id", r"[_\p{L}][_\p{L}\p{Nd}]*"),
    ]
}

lazy_static! {
    static ref GO_GRAMMAR: Grammar =
        Grammar::new(go_specs()).expect("built-in Go token table must compile");
}
