//! Bare-bones REPL: parse list expressions and print their canonical form.
//!
//! Run interactively as:      `RUST_LOG=info cargo run --bin conscell`.
//! Parse a file line by line: `cargo run --bin conscell -- --file exprs.txt`.

use clap::{Arg, Command};
use colored::*;
use log::{info, LevelFilter};
use rustyline::error::ReadlineError;
use rustyline::Editor;
use std::fs;

use conscell::prelude::*;


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("conscell")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse list expressions and print their canonical form")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .takes_value(true)
                .value_name("PATH")
                .help("Parse each non-blank line of PATH instead of reading interactively"),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .takes_value(true)
                .value_name("N")
                .help("Deepest parenthesis nesting accepted by the parser"),
        )
        .get_matches();

    let mut config = ParserConfig::default();
    if let Some(depth) = matches.value_of("max-depth") {
        let depth = match depth.parse::<usize>() {
            Ok(depth) => depth,
            Err(err) => return Err(format!("Invalid --max-depth {:?}: {}", depth, err)),
        };
        config = config.with_max_depth(depth);
    }
    let parser = Parser::with_config(config);

    match matches.value_of("file") {
        Some(path) => file_repl(&parser, path).map_err(|err| err.to_string()),
        None => interactive_repl(&parser),
    }
}

fn interactive_repl(parser: &Parser) -> Result<(), String> {
    let mut editor = Editor::<()>::new();

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str());
                print_result(parser.parse(&line));
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.to_string()),
        }
    }
}

fn file_repl(parser: &Parser, path: &str) -> Result<(), Error> {
    let contents = fs::read_to_string(path)?;
    info!("Parsing {} ({} bytes)", path, contents.len());

    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        println!("> {}", line);
        print_result(parser.parse(line));
    }
    Ok(())
}

fn print_result(result: Result<Option<HeapNode>, ParseError>) {
    match result {
        Ok(node) => {
            let node = node.as_deref();
            println!("-> {}", to_text(node).green());
            println!("   length {}, sum {}", length(node), sum(node));
        }
        Err(err) => {
            println!(" {}", err.to_string().red());
        }
    }
    println!();
}
