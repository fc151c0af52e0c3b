//! # monkey-lang
//!
//! monkey-lang is a tree-walking interpreter for the Monkey programming
//! language: a small, dynamically-typed, expression-oriented language with
//! first-class functions, closures, integers, booleans, strings, arrays, and
//! hash maps.
//!
//! Data flows strictly forward: source string → lexer → tokens → parser →
//! AST → evaluator → value. Each stage consumes the previous stage's output;
//! there is no back-edge.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
)]

use std::rc::Rc;

use crate::interpreter::{
    environment::Environment, evaluator::core::eval_program, parser::core::Parser,
    value::core::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` sums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Renders every node's canonical debug form, with grouping made explicit.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Parse errors accumulate on the parser; runtime errors end
/// an evaluation at the point of failure.
///
/// # Responsibilities
/// - Defines error enums for both failure channels.
/// - Renders the exact user-facing message for every failure mode.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and lexical environments to provide a complete runtime
/// for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment,
///   and value types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;

/// Runs a complete source text through the pipeline in the given environment.
///
/// The source is lexed and parsed first; when the parser recorded errors the
/// first of them is returned and nothing is evaluated. Otherwise the program
/// is evaluated and its resulting value returned. Callers that need the full
/// parse error list (such as the REPL) drive [`Parser`] directly.
///
/// # Errors
/// Returns the first parse error, or whatever runtime error ended the
/// evaluation.
///
/// # Example
/// ```
/// use monkey_lang::{interpreter::environment::Environment, run_source};
///
/// let env = Environment::new();
/// let value = run_source("let double = fn(x) { x * 2 }; double(21);", &env).unwrap();
///
/// assert_eq!(value.to_string(), "42");
///
/// // The environment persists across runs, like in a session.
/// let value = run_source("double(100);", &env).unwrap();
/// assert_eq!(value.to_string(), "200");
/// ```
pub fn run_source(source: &str,
                  env: &Rc<Environment>)
                  -> Result<Value, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    if let Some(error) = parser.into_errors().into_iter().next() {
        return Err(Box::new(error));
    }

    Ok(eval_program(&program, env)?)
}
