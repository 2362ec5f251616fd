use std::{fs::read_to_string, path::{Path, PathBuf}, process::ExitCode, time::Instant};

use clap::Parser;
use golex::{
    display_error, Grammar, Interner, Lexer, LexerOptions, Locale, SharedIdentifierTable, TokenClass,
};

#[derive(Parser)]
#[command(name = "golex")]
#[command(author, version, about = "Tokenize Go source files", long_about = None)]
struct Cli {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Only print tokens of this class (keyword, operator, id, constant, punctuation)
    #[arg(short, long)]
    class: Option<TokenClass>,

    /// Keep one identifier table for all files, so ids carry over between them
    #[arg(long)]
    shared_ids: bool,

    /// Language of diagnostic messages (en, ru)
    #[arg(long, default_value_t = Locale::En)]
    locale: Locale,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_log_filter(cli.verbose)))
        .init();

    let options = LexerOptions::default().with_locale(cli.locale);
    let shared = SharedIdentifierTable::new();
    let mut failed = false;

    for file in &cli.files {
        let source = match read_to_string(file) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("Error: cannot read {}: {}", file.display(), err);
                failed = true;
                continue;
            }
        };

        let ok = if cli.shared_ids {
            let lex = Lexer::with_interner(source, Grammar::go(), shared.clone()).with_options(options);
            run(lex, file, cli.class)
        } else {
            let lex = Lexer::new(source, Grammar::go()).with_options(options);
            run(lex, file, cli.class)
        };

        failed |= !ok;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// `RUST_LOG` still overrides this.
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn run<I: Interner>(mut lex: Lexer<'_, I>, file: &Path, class: Option<TokenClass>) -> bool {
    let start = Instant::now();
    let result = lex.analyze().map(|_| ());
    log::info!("Tokenized {} in {:?}", file.display(), start.elapsed());

    println!("-> {}", file.display());
    let tokens = match class {
        Some(class) => lex.lists().by_class(class),
        None => lex.tokens(),
    };
    for token in tokens {
        println!("{}", token);
    }

    match result {
        Ok(()) => true,
        Err(err) => {
            eprint!("{}", display_error(&err, lex.source(), &file.to_string_lossy()));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{default_log_filter, Cli};
    use clap::Parser;

    #[test]
    fn test_verbose_raises_log_filter() {
        assert_eq!(default_log_filter(true), "debug");
        assert_eq!(default_log_filter(false), "warn");
    }

    #[test]
    fn test_parse_verbose_flag() {
        let cli = Cli::try_parse_from(["golex", "-v", "main.go"]).unwrap();

        assert!(cli.verbose);
        assert_eq!(default_log_filter(cli.verbose), "debug");
    }
}
