//! Command-line interface for json-loose
//!
//! Reads a loose-JSON file and prints its strict-JSON form to stdout.
//!
//! Usage:
//!   json-loose `<path>` [--context `<file>`] [--format `<format>`]

use clap::{Arg, Command};

use json_loose::{convert_with, lexer, Context};

fn main() {
    let matches = Command::new("json-loose")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert loose JSON-like text into strict JSON")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the loose-JSON file to convert")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("context")
                .long("context")
                .short('c')
                .help("Path to a JSON object file whose members substitute identifiers"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'json' (converted text) or 'tokens' (raw token stream)")
                .default_value("json"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let context_path = matches.get_one::<String>("context");
    let format = matches.get_one::<String>("format").unwrap();

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    match format.as_str() {
        "json" => {
            let context = context_path.map_or_else(Context::new, |p| load_context(p));
            handle_convert(&source, &context);
        }
        "tokens" => handle_tokens(&source),
        other => {
            eprintln!("Error: unknown format '{}'", other);
            std::process::exit(1);
        }
    }
}

/// Convert the source and print the strict JSON.
fn handle_convert(source: &str, context: &Context) {
    let output = convert_with(source, context).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Print the raw token stream of the whole file as pretty JSON. No entry
/// validation here: this is a lexer debugging view.
fn handle_tokens(source: &str) {
    let tokens = lexer::tokenize(source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let rendered = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
        eprintln!("Error serializing tokens: {}", e);
        std::process::exit(1);
    });

    println!("{}", rendered);
}

/// Read a context file: a JSON object whose members become the
/// substitution table.
fn load_context(path: &str) -> Context {
    let raw = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading context file: {}", e);
        std::process::exit(1);
    });

    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("Error parsing context file: {}", e);
        std::process::exit(1);
    });

    match parsed {
        serde_json::Value::Object(members) => Context::from(members),
        _ => {
            eprintln!("Error: context file must contain a JSON object");
            std::process::exit(1);
        }
    }
}
