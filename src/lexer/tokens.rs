use std::{fmt::Display, str::FromStr};

use crate::Position;

/// Coarse category of a token. Non-skip classes each get their own list.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenClass {
    Keyword,
    Operator,
    Id,
    Constant,
    Punctuation,
    Skip,
}

impl TokenClass {
    pub const EMITTED: [TokenClass; 5] = [
        TokenClass::Keyword,
        TokenClass::Operator,
        TokenClass::Id,
        TokenClass::Constant,
        TokenClass::Punctuation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenClass::Keyword => "keyword",
            TokenClass::Operator => "operator",
            TokenClass::Id => "id",
            TokenClass::Constant => "constant",
            TokenClass::Punctuation => "punctuation",
            TokenClass::Skip => "skip",
        }
    }

    /// Keywords and constants must not be followed by a word character.
    pub fn needs_boundary(&self) -> bool {
        matches!(self, TokenClass::Keyword | TokenClass::Constant)
    }
}

impl Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TokenClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keyword" => Ok(TokenClass::Keyword),
            "operator" => Ok(TokenClass::Operator),
            "id" => Ok(TokenClass::Id),
            "constant" => Ok(TokenClass::Constant),
            "punctuation" => Ok(TokenClass::Punctuation),
            "skip" => Ok(TokenClass::Skip),
            other => Err(format!("unknown token class `{}`", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Pattern name; identifiers carry their interned id as a suffix (`id3`).
    pub kind: String,
    pub text: String,
    pub class: TokenClass,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} {} {} {:?}",
            self.position.line, self.position.column, self.class, self.kind, self.text
        )
    }
}

impl Token {
    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// Offset one past the last byte of the lexeme.
    pub fn end(&self) -> usize {
        self.position.offset + self.text.len()
    }

    pub fn is_skip(&self) -> bool {
        self.class == TokenClass::Skip
    }
}

/// Emitted tokens of one run: the master list in source order plus one
/// list per non-skip class. Every token lives in the master list and in
/// exactly one class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenLists {
    all: Vec<Token>,
    keywords: Vec<Token>,
    operators: Vec<Token>,
    identifiers: Vec<Token>,
    constants: Vec<Token>,
    punctuation: Vec<Token>,
}

impl TokenLists {
    pub fn new() -> Self {
        TokenLists::default()
    }

    /// Skip-class tokens are dropped.
    pub fn push(&mut self, token: Token) {
        let list = match token.class {
            TokenClass::Keyword => &mut self.keywords,
            TokenClass::Operator => &mut self.operators,
            TokenClass::Id => &mut self.identifiers,
            TokenClass::Constant => &mut self.constants,
            TokenClass::Punctuation => &mut self.punctuation,
            TokenClass::Skip => return,
        };

        list.push(token.clone());
        self.all.push(token);
    }

    pub fn all(&self) -> &[Token] {
        &self.all
    }

    pub fn keywords(&self) -> &[Token] {
        &self.keywords
    }

    pub fn operators(&self) -> &[Token] {
        &self.operators
    }

    pub fn identifiers(&self) -> &[Token] {
        &self.identifiers
    }

    pub fn constants(&self) -> &[Token] {
        &self.constants
    }

    pub fn punctuation(&self) -> &[Token] {
        &self.punctuation
    }

    pub fn by_class(&self, class: TokenClass) -> &[Token] {
        match class {
            TokenClass::Keyword => &self.keywords,
            TokenClass::Operator => &self.operators,
            TokenClass::Id => &self.identifiers,
            TokenClass::Constant => &self.constants,
            TokenClass::Punctuation => &self.punctuation,
            TokenClass::Skip => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.all.iter()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.all
    }
}

impl<'a> IntoIterator for &'a TokenLists {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.all.iter()
    }
}
