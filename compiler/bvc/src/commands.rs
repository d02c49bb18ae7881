//! Command implementations behind the `bvc` binary.
//!
//! Each command takes its input as a string and returns the text to print,
//! so everything but argument parsing and I/O is testable in-process.

use std::fmt::Write;
use std::io::Read;

use crate::pipeline::{decode, encode_value};
use crate::{EvalConfig, Error, Result};

/// Read a program from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|source| Error::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(input)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_string(),
            source,
        }),
    }
}

/// `bvc eval`: the value of a program, as plain text or as wire text.
pub fn eval_source(source: &str, config: &EvalConfig, wire: bool) -> Result<String> {
    let (arena, root) = decode(source)?;
    let mut interpreter = bv_eval::Interpreter::with_cache_mode(&arena, config.cache);
    let value = interpreter.eval_program(root)?;

    if wire {
        encode_value(&value, &arena)
    } else {
        Ok(value.to_string())
    }
}

/// `bvc encode`: the string token for a message.
pub fn encode_text(text: &str) -> Result<String> {
    crate::pipeline::encode(text)
}

/// `bvc render`: the program in lambda notation.
pub fn render_source(source: &str) -> Result<String> {
    crate::pipeline::render(source)
}

/// `bvc lex`: one decoded atom per line, next to the token it came from.
pub fn lex_source(source: &str) -> Result<String> {
    let mut out = String::new();
    for (index, token) in source.split_ascii_whitespace().enumerate() {
        let atom = bv_codec::decode_token(token)?;
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{index:>5}  {token:<16} {atom}");
    }
    Ok(out)
}

/// Drop one trailing line terminator from text read off stdin.
pub fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
