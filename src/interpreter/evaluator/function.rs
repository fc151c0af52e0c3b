use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval_block},
        value::core::Value,
    },
};

/// Applies a callee to already-evaluated arguments.
///
/// A user function runs its body in a fresh environment enclosed in the
/// function's *captured* environment (not the caller's), with each parameter
/// bound positionally. A [`Value::Return`] produced by the body is unwrapped
/// here, at the call boundary, so a `return` never unwinds past the function
/// it appears in. Builtins are invoked directly with the argument list.
///
/// # Parameters
/// - `callee`: The value in call position.
/// - `arguments`: The evaluated arguments, in source order.
///
/// # Returns
/// The call's result.
pub(in crate::interpreter::evaluator) fn apply_function(callee: &Value,
                                                        arguments: Vec<Value>)
                                                        -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Err(RuntimeError::WrongArgumentCount { got: arguments.len(),
                                                              expected:
                                                                  function.parameters.len(), });
            }

            let env = Environment::enclosed(Rc::clone(&function.env));
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                env.set(parameter, argument);
            }

            match eval_block(&function.body, &env)? {
                Value::Return(inner) => Ok(*inner),
                value => Ok(value),
            }
        },
        Value::Builtin(builtin) => (builtin.func)(&arguments),
        other => Err(RuntimeError::NotCallable { value: other.to_string() }),
    }
}
