//! Integration tests for whole-file tokenization.
//!
//! These tests run the built-in Go token table over complete programs and
//! check the token lists, positions, identifier sharing and diagnostics.

use std::collections::{HashMap, HashSet};

use golex::{
    display_error, tokenize, Grammar, Lexer, Locale, SharedIdentifierTable, Token, TokenClass, TokenLists,
};
use pretty_assertions::assert_eq;

const CALCULATOR: &str = include_str!("fixtures/calculator.go");
const GRADES: &str = include_str!("fixtures/grades.go");
const BROKEN: &str = include_str!("fixtures/broken.go");

fn kind_of(lists: &TokenLists, text: &str) -> Vec<String> {
    lists
        .identifiers()
        .iter()
        .filter(|t| t.text == text)
        .map(|t| t.kind.clone())
        .collect()
}

fn assert_well_formed(source: &str, lists: &TokenLists) {
    let by_class: usize = TokenClass::EMITTED.iter().map(|c| lists.by_class(*c).len()).sum();
    assert_eq!(lists.len(), by_class);

    for pair in lists.all().windows(2) {
        assert!(pair[0].end() <= pair[1].offset(), "{} overlaps {}", pair[0], pair[1]);
    }

    for token in lists.all() {
        assert!(!token.is_skip());
        assert_eq!(&source[token.offset()..token.end()], token.text);
        assert_eq!(golex::line_col(source, token.offset()), Some((token.line(), token.column())));
    }
}

#[test]
fn test_tokenize_calculator() {
    let lists = tokenize(CALCULATOR.to_string()).unwrap();
    assert_well_formed(CALCULATOR, &lists);

    let first: Vec<&str> = lists.all().iter().take(6).map(|t| t.text.as_str()).collect();
    assert_eq!(first, vec!["package", "main", "import", "(", "\"fmt\"", ")"]);

    let keywords: HashSet<&str> = lists.keywords().iter().map(|t| t.text.as_str()).collect();
    for keyword in ["func", "switch", "case", "default", "return", "var", "if", "else", "const"] {
        assert!(keywords.contains(keyword), "missing keyword {}", keyword);
    }

    let fmt = kind_of(&lists, "fmt");
    assert!(fmt.len() > 5);
    assert!(fmt.iter().all(|k| k == &fmt[0]));
}

#[test]
fn test_tokenize_grades() {
    let lists = tokenize(GRADES.to_string()).unwrap();
    assert_well_formed(GRADES, &lists);

    let constants: HashMap<&str, &str> = lists
        .constants()
        .iter()
        .map(|t| (t.text.as_str(), t.kind.as_str()))
        .collect();
    assert_eq!(constants.get("`raw name`"), Some(&"raw_string_lit"));
    assert_eq!(constants.get("0x32"), Some(&"int_lit"));
    assert_eq!(constants.get("3.0"), Some(&"float_lit"));
    assert_eq!(constants.get("'A'"), Some(&"rune_lit"));
    assert_eq!(constants.get("\"Иван\""), Some(&"string_lit"));
    assert_eq!(constants.get("nil"), Some(&"nil"));

    let students: Vec<&Token> = lists.identifiers().iter().filter(|t| t.text == "students").collect();
    assert_eq!((students[0].line(), students[0].column()), (21, 2));
    assert!(lists.all().iter().all(|t| !t.text.contains("Passing")));
}

#[test]
fn test_broken_file_reports_position() {
    let mut lex = Lexer::new(BROKEN.to_string(), Grammar::go());

    let err = lex.analyze().unwrap_err();
    assert_eq!((err.line(), err.column()), (5, 9));
    assert_eq!(err.snippet(), "? 2 : 3");
    assert_eq!(err.message(Locale::Ru), "ошибка на позиции 5 9: ? 2 : 3");

    let texts: Vec<&str> = lex.tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["package", "main", "func", "main", "(", ")", "{", "x", ":=", "1", "y", ":=", "x"]);
}

#[test]
fn test_display_error() {
    let err = tokenize(BROKEN.to_string()).unwrap_err();
    let rendered = display_error(&err, BROKEN, "broken.go");

    assert_eq!(
        rendered,
        "Error: UnrecognisedInput (No token pattern matches the start of `? 2 : 3`)\n\
         -> broken.go\n  |\n\
         5 | y := x ? 2 : 3\n  \
         | -------^\n"
    );
}

#[test]
fn test_shared_ids_across_files() {
    let shared = SharedIdentifierTable::new();

    let mut first = Lexer::with_interner(CALCULATOR.to_string(), Grammar::go(), shared.clone());
    let calculator = first.analyze().unwrap().clone();
    let mut second = Lexer::with_interner(GRADES.to_string(), Grammar::go(), shared.clone());
    let grades = second.analyze().unwrap().clone();

    assert_eq!(kind_of(&calculator, "main")[0], kind_of(&grades, "main")[0]);
    assert_eq!(kind_of(&calculator, "fmt")[0], kind_of(&grades, "fmt")[0]);

    let distinct: HashSet<&str> = calculator
        .identifiers()
        .iter()
        .chain(grades.identifiers())
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(shared.len(), distinct.len());
}

#[test]
fn test_separate_runs_do_not_share_ids() {
    let calculator = tokenize(CALCULATOR.to_string()).unwrap();
    let grades = tokenize(GRADES.to_string()).unwrap();

    assert_eq!(calculator.identifiers()[0].kind, "id0");
    assert_eq!(grades.identifiers()[0].kind, "id0");
    assert_eq!(grades.identifiers()[0].text, "main");
}

#[test]
fn test_shared_ids_across_threads() {
    let shared = SharedIdentifierTable::new();
    let sources = [CALCULATOR, GRADES, CALCULATOR, GRADES];

    let runs: Vec<TokenLists> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| {
                let table = shared.clone();
                scope.spawn(move || {
                    let mut lex = Lexer::with_interner(source.to_string(), Grammar::go(), table);
                    lex.analyze().unwrap();
                    lex.into_lists()
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut seen: HashMap<String, String> = HashMap::new();
    for lists in &runs {
        for token in lists.identifiers() {
            let kind = seen.entry(token.text.clone()).or_insert_with(|| token.kind.clone());
            assert_eq!(kind, &token.kind);
        }
    }

    let ids: HashSet<&String> = seen.values().collect();
    assert_eq!(ids.len(), seen.len());
    assert_eq!(shared.len(), seen.len());
}
