//! ferroblock CLI - dump the block tokens of a Markdown document

use std::io::{self, Read, Write};
use std::process::ExitCode;

use ferroblock::Token;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    // Simple usage: read from stdin or file
    let input = if args.len() > 1 && args[1] != "-" {
        std::fs::read_to_string(&args[1])
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    };

    let input = match input {
        Ok(input) => input,
        Err(err) => {
            eprintln!("ferroblock: {err}");
            return ExitCode::FAILURE;
        }
    };

    let tokens = match ferroblock::tokenize(&input) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("ferroblock: {err}");
            return ExitCode::FAILURE;
        }
    };

    match write_tokens(&mut io::stdout().lock(), &tokens) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ferroblock: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Write one token per line, indented by container depth.
fn write_tokens(out: &mut impl Write, tokens: &[Token]) -> io::Result<()> {
    let mut depth = 0usize;
    for token in tokens {
        if token.nesting() < 0 {
            depth = depth.saturating_sub(1);
        }
        writeln!(out, "{:width$}{token:?}", "", width = depth * 2)?;
        if token.nesting() > 0 {
            depth += 1;
        }
    }
    out.flush()
}
