use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use monkey_lang::{
    interpreter::{environment::Environment, evaluator::core::eval_program, value::core::Value},
    run_source,
};

/// monkey-lang is a tree-walking interpreter for the Monkey programming
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to run. Without it, an interactive session starts.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path),
        None => repl(),
    }
}

/// Runs a whole script in one environment and prints its final value.
fn run_file(path: &Path) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               path.display());
                     std::process::exit(1);
                 });

    let env = Environment::new();
    match run_source(&source, &env) {
        Ok(Value::Null) => {},
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// The interactive session: one environment for its whole lifetime, one
/// lex→parse→eval pipeline run per input line.
fn repl() {
    let env = Environment::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let mut parser = monkey_lang::interpreter::parser::core::Parser::new(&line);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            for error in parser.errors() {
                println!("{error}");
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(value) => println!("uh: {value}"),
            Err(error) => println!("uh: Error: {error}"),
        }
    }
}
