use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    config::LexerOptions,
    errors::errors::{Error, ErrorImpl},
    LineIndex, Position, MK_TOKEN,
};

use super::{
    grammar::Grammar,
    interner::{IdentifierTable, Interner},
    tokens::{Token, TokenClass, TokenLists},
};

lazy_static! {
    // Everything up to the last word character (or `|`/`$`) on the first
    // line that has one.
    static ref ERROR_SNIPPET: Regex = Regex::new(r".*[\w|$]").unwrap();
}

/// One tokenization run over a fully loaded source string.
///
/// `pos` only moves forward, by the length of each accepted lexeme. A scan
/// error is terminal: the position freezes and every later call to
/// [`Lexer::next_token`] returns the same error.
pub struct Lexer<'g, I: Interner = IdentifierTable> {
    grammar: &'g Grammar,
    interner: I,
    options: LexerOptions,
    source: String,
    lines: LineIndex,
    pos: usize,
    lists: TokenLists,
    failure: Option<Error>,
}

impl<'g> Lexer<'g> {
    /// A run with its own, initially empty, identifier table.
    pub fn new(source: String, grammar: &'g Grammar) -> Lexer<'g> {
        Lexer::with_interner(source, grammar, IdentifierTable::new())
    }
}

impl<'g, I: Interner> Lexer<'g, I> {
    pub fn with_interner(source: String, grammar: &'g Grammar, interner: I) -> Lexer<'g, I> {
        Lexer {
            grammar,
            interner,
            options: LexerOptions::default(),
            lines: LineIndex::new(&source),
            source,
            pos: 0,
            lists: TokenLists::new(),
            failure: None,
        }
    }

    pub fn with_options(mut self, options: LexerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn lists(&self) -> &TokenLists {
        &self.lists
    }

    pub fn tokens(&self) -> &[Token] {
        self.lists.all()
    }

    pub fn interner(&self) -> &I {
        &self.interner
    }

    pub fn failure(&self) -> Option<&Error> {
        self.failure.as_ref()
    }

    pub fn into_lists(self) -> TokenLists {
        self.lists
    }

    pub fn into_parts(self) -> (TokenLists, I) {
        (self.lists, self.interner)
    }

    fn position_at(&self, offset: usize) -> Position {
        self.lines
            .line_col(&self.source, offset)
            .unwrap_or_else(|| Position::new(offset, 0, 0))
    }

    /// Produces the next token, skip-class ones included.
    ///
    /// `Ok(None)` once the input is consumed. Skip-class tokens are returned
    /// to the caller but never recorded in the token lists.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        if self.at_eof() {
            return Ok(None);
        }

        let grammar = self.grammar;
        let Some(found) = grammar.match_at(self.remainder()) else {
            return Err(self.fail());
        };

        let spec = found.spec;
        let text = self.source[self.pos..self.pos + found.len].to_string();
        let kind = match spec.class {
            TokenClass::Id => format!("{}{}", spec.name, self.interner.intern(&text)),
            _ => spec.name.clone(),
        };

        let token = MK_TOKEN!(kind, text, spec.class, self.position_at(self.pos));
        trace!("{}", token);

        self.pos += found.len;
        self.lists.push(token.clone());

        Ok(Some(token))
    }

    fn fail(&mut self) -> Error {
        let snippet = ERROR_SNIPPET
            .find(self.remainder())
            .map(|m| m.as_str().trim_matches(' ').to_string())
            .unwrap_or_default();

        let err = Error::new(ErrorImpl::UnrecognisedInput { snippet }, self.position_at(self.pos));
        debug!("scan halted at offset {}: {}", self.pos, err);

        self.failure = Some(err.clone());
        err
    }

    /// Runs the scan to the end of input.
    ///
    /// On failure the error is logged at debug level and returned; tokens
    /// accepted before it stay available through [`Lexer::lists`].
    pub fn analyze(&mut self) -> Result<&TokenLists, Error> {
        loop {
            match self.next_token() {
                Ok(Some(_)) => continue,
                Ok(None) => break,
                Err(err) => {
                    debug!("{}", err.message(self.options.locale));
                    return Err(err);
                }
            }
        }

        debug!(
            "lexed {} tokens ({} keywords, {} operators, {} identifiers, {} constants, {} punctuation)",
            self.lists.len(),
            self.lists.keywords().len(),
            self.lists.operators().len(),
            self.lists.identifiers().len(),
            self.lists.constants().len(),
            self.lists.punctuation().len()
        );

        Ok(&self.lists)
    }
}

/// Yields emitted (non-skip) tokens and stops after the first error.
impl<I: Interner> Iterator for Lexer<'_, I> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failure.is_some() {
            return None;
        }

        loop {
            match self.next_token() {
                Ok(Some(token)) if token.is_skip() => continue,
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => return None,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Tokenizes Go source with the built-in table and a fresh identifier table.
pub fn tokenize(source: String) -> Result<TokenLists, Error> {
    let mut lex = Lexer::new(source, Grammar::go());
    lex.analyze()?;
    Ok(lex.into_lists())
}
