use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{BuiltinFunction, Value},
    },
};

/// Resolves a name against the builtin table.
///
/// Name resolution tries the environment chain first, so a user binding
/// shadows the builtin of the same name.
///
/// # Returns
/// The builtin as a callable value, or `None` when the name is not a builtin.
pub(in crate::interpreter::evaluator) fn lookup(name: &str) -> Option<Value> {
    let builtin = match name {
        "len" => BuiltinFunction { name: "len", func: len },
        "puts" => BuiltinFunction { name: "puts", func: puts },
        "first" => BuiltinFunction { name: "first", func: first },
        "last" => BuiltinFunction { name: "last", func: last },
        "rest" => BuiltinFunction { name: "rest", func: rest },
        "push" => BuiltinFunction { name: "push", func: push },
        _ => return None,
    };

    Some(Value::Builtin(builtin))
}

/// Checks that the argument list has exactly the expected length.
const fn check_arity(args: &[Value], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                               expected })
    }
}

/// `len(x)`: byte length of a string, or element count of an array.
fn len(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Str(s) => i32::try_from(s.len()).map(Value::Integer)
                                               .map_err(|_| RuntimeError::Overflow),
        Value::Array(elements) => i32::try_from(elements.len()).map(Value::Integer)
                                                               .map_err(|_| RuntimeError::Overflow),
        other => Err(RuntimeError::UnsupportedArgument { function: "len",
                                                         kind:     other.kind(), }),
    }
}

/// `puts(...)`: prints each argument's inspect form on its own line.
/// Always returns null.
#[allow(clippy::unnecessary_wraps)]
fn puts(args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        println!("{arg}");
    }
    Ok(Value::Null)
}

/// `first(array)`: the first element, or null for an empty array.
fn first(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { function: "first",
                                                         kind:     other.kind(), }),
    }
}

/// `last(array)`: the last element, or null for an empty array.
fn last(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { function: "last",
                                                         kind:     other.kind(), }),
    }
}

/// `rest(array)`: a new array of all elements but the first, or null for an
/// empty array.
fn rest(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::Array(Rc::new(elements[1..].to_vec())))
            }
        },
        other => Err(RuntimeError::UnsupportedArgument { function: "rest",
                                                         kind:     other.kind(), }),
    }
}

/// `push(array, value)`: a new array with the value appended. The original
/// array is untouched.
fn push(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2)?;

    match &args[0] {
        Value::Array(elements) => {
            let mut elements = elements.as_ref().clone();
            elements.push(args[1].clone());
            Ok(Value::Array(Rc::new(elements)))
        },
        other => Err(RuntimeError::UnsupportedArgument { function: "push",
                                                         kind:     other.kind(), }),
    }
}
