use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a unary operator to an already-evaluated operand.
pub(in crate::interpreter::evaluator) fn eval_unary(op: UnaryOperator,
                                                    value: &Value)
                                                    -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(eval_not(value)),
        UnaryOperator::Negate => eval_negate(value),
    }
}

/// Logical NOT over truthiness: `true` and `false` invert, `null` is `true`,
/// and every other value (including zero) is `false`.
fn eval_not(value: &Value) -> Value {
    match value {
        Value::Bool(b) => Value::Bool(!b),
        Value::Null => Value::Bool(true),
        _ => Value::Bool(false),
    }
}

/// Arithmetic negation. Only integers can be negated.
fn eval_negate(value: &Value) -> EvalResult<Value> {
    match value {
        Value::Integer(n) => n.checked_neg()
                              .map(Value::Integer)
                              .ok_or(RuntimeError::Overflow),
        _ => Err(RuntimeError::UnknownUnaryOperator { operator: UnaryOperator::Negate,
                                                      operand:  value.kind(), }),
    }
}
