//! Bound-variable interpreter CLI.

use bvc::commands::{
    encode_text, eval_source, lex_source, read_input, render_source, strip_line_ending,
};
use bvc::{CacheMode, EvalConfig, Result};

fn main() {
    bvc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "eval" => eval_command(&args[2..]),
        "encode" => encode_command(&args[2..]),
        "render" => single_input(&args[2..]).and_then(|source| render_source(&source)),
        "lex" => single_input(&args[2..]).and_then(|source| lex_source(&source)),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("bvc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{output}");
            } else {
                println!("{output}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn eval_command(args: &[String]) -> Result<String> {
    let mut config = EvalConfig::from_env()?;
    let mut wire = false;
    let mut path = None;

    for arg in args {
        if arg == "--no-cache" {
            config = config.with_cache(CacheMode::Disabled);
        } else if arg == "--cache" {
            config = config.with_cache(CacheMode::Enabled);
        } else if arg == "--wire" || arg == "-w" {
            wire = true;
        } else if (arg == "-" || !arg.starts_with('-')) && path.is_none() {
            path = Some(arg.as_str());
        } else {
            eprintln!("warning: ignoring argument '{arg}'");
        }
    }

    let source = read_input(path)?;
    eval_source(&source, &config, wire)
}

fn encode_command(args: &[String]) -> Result<String> {
    if args.is_empty() {
        let text = read_input(None)?;
        return encode_text(strip_line_ending(&text));
    }
    encode_text(&args.join(" "))
}

fn single_input(args: &[String]) -> Result<String> {
    read_input(args.first().map(String::as_str))
}

fn print_usage() {
    println!("bvc - bound-variable interpreter");
    println!();
    println!("Usage: bvc <command> [options]");
    println!();
    println!("Commands:");
    println!("  eval [FILE|-]        Evaluate a wire program and print its value");
    println!("  encode [TEXT...]     Print the string token for TEXT (stdin if omitted)");
    println!("  render [FILE|-]      Print a wire program in lambda notation");
    println!("  lex [FILE|-]         Print the decoded atoms of a wire program");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Eval options:");
    println!("  --no-cache          Disable the reduction cache");
    println!("  --cache             Enable the reduction cache (default)");
    println!("  --wire, -w          Print the value as wire text");
    println!();
    println!("Environment:");
    println!("  {}=on|off       Reduction cache setting", bvc::CACHE_ENV);
    println!("  {}=<filter>       Tracing filter (falls back to RUST_LOG)", bvc::LOG_ENV);
    println!("  {}=1         Print traces as an indented span tree", bvc::LOG_TREE_ENV);
}
