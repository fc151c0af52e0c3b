use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a binary operator to two already-evaluated operands.
///
/// Integer pairs support the full arithmetic and comparison set; string pairs
/// support concatenation and equality. For every other pairing, `==` and `!=`
/// compare structurally (two values of different kinds are simply unequal),
/// a remaining operator over two different kinds is a type mismatch, and a
/// remaining operator over one kind is unknown.
pub(in crate::interpreter::evaluator) fn eval_binary(op: BinaryOperator,
                                                     left: &Value,
                                                     right: &Value)
                                                     -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_binary(op, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_binary(op, l, r),
        _ => match op {
            BinaryOperator::Equal => Ok(Value::Bool(left == right)),
            BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
            _ if std::mem::discriminant(left) != std::mem::discriminant(right) => {
                Err(RuntimeError::TypeMismatch { left:     left.kind(),
                                                 operator: op,
                                                 right:    right.kind(), })
            },
            _ => Err(RuntimeError::UnknownBinaryOperator { left:     left.kind(),
                                                           operator: op,
                                                           right:    right.kind(), }),
        },
    }
}

/// Integer arithmetic and comparisons.
///
/// Arithmetic is checked: overflow and division by zero surface as runtime
/// errors instead of wrapping or panicking. Division truncates toward zero.
fn eval_integer_binary(op: BinaryOperator, left: i32, right: i32) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => left.checked_add(right)
                                   .map(Value::Integer)
                                   .ok_or(RuntimeError::Overflow),
        BinaryOperator::Sub => left.checked_sub(right)
                                   .map(Value::Integer)
                                   .ok_or(RuntimeError::Overflow),
        BinaryOperator::Mul => left.checked_mul(right)
                                   .map(Value::Integer)
                                   .ok_or(RuntimeError::Overflow),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right)
                .map(Value::Integer)
                .ok_or(RuntimeError::Overflow)
        },
        BinaryOperator::Less => Ok(Value::Bool(left < right)),
        BinaryOperator::Greater => Ok(Value::Bool(left > right)),
        BinaryOperator::Equal => Ok(Value::Bool(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
    }
}

/// String concatenation and equality.
fn eval_string_binary(op: BinaryOperator, left: &str, right: &str) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Str(format!("{left}{right}"))),
        BinaryOperator::Equal => Ok(Value::Bool(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
        _ => Err(RuntimeError::UnknownBinaryOperator { left:     "STRING",
                                                       operator: op,
                                                       right:    "STRING", }),
    }
}
