use std::fs;
use std::io::{self, Read};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::style::Stylize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blparse::pretty::{pretty_program, pretty_statement};
use blparse::{ParseError, PrettyConfig, Source, Tokens, parse_block, parse_program, tokenize};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// BL source file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Parse the input as a sequence of statements instead of a program
    #[arg(short = 's', long)]
    statement: bool,

    /// Print the token stream before parsing
    #[arg(short = 't', long)]
    tokens: bool,

    /// Print the parsed tree instead of pretty-printed source
    #[arg(long)]
    ast: bool,

    /// Spaces per indentation level when pretty printing
    #[arg(long, value_name = "N", default_value_t = 4)]
    indent: usize,

    /// Log parser progress to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = read_source(args.file.as_deref())?;
    let mut tokens = tokenize(&source);
    if args.tokens {
        for token in tokens.iter() {
            let (line, col) = source.line_col(token.start);
            println!("{line}:{col}\t{token}");
        }
    }

    let config = PrettyConfig { indent: args.indent };
    let output = if args.statement {
        parse_statements(&mut tokens).map(|stmt| {
            if args.ast {
                format!("{stmt:#?}\n")
            } else {
                pretty_statement(&stmt, 0, &config)
            }
        })
    } else {
        parse_program(&mut tokens).map(|program| {
            info!(program = program.name(), "parse succeeded");
            if args.ast {
                format!("{program:#?}\n")
            } else {
                pretty_program(&program, &config)
            }
        })
    };

    match output {
        Ok(text) => {
            print!("{text}");
            Ok(())
        }
        Err(err) => {
            report(&source, &err);
            std::process::exit(1);
        }
    }
}

/// Parse a block that must use up all of `tokens`.
fn parse_statements(tokens: &mut Tokens) -> Result<blparse::Statement, ParseError> {
    let block = parse_block(tokens)?;
    match tokens.front() {
        Some(t) if !t.is_end_of_input() => Err(ParseError::TrailingInput { found: t.clone() }),
        _ => Ok(block),
    }
}

fn read_source(path: Option<&str>) -> Result<Source> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {path}"))?;
            Ok(Source::new(path, &text))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(Source::new("<stdin>", &text))
        }
    }
}

fn report(source: &Source, err: &ParseError) {
    let (line, col) = source.line_col(err.token().start);
    eprintln!(
        "{} {}:{line}:{col}: {err}",
        "error:".red().bold(),
        source.origin()
    );
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("blparse=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blparse=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
