use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval},
        value::{
            core::Value,
            hash::{HashKey, HashPair},
        },
    },
};

/// Applies the index operator to two already-evaluated operands.
///
/// Arrays take integer indices; hashes take any hashable key. Everything else
/// rejects the operator.
pub(in crate::interpreter::evaluator) fn eval_index(left: &Value,
                                                    index: &Value)
                                                    -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            Ok(eval_array_index(elements, *position))
        },
        (Value::Hash(pairs), key) => eval_hash_index(pairs, key),
        _ => Err(RuntimeError::IndexNotSupported { kind: left.kind() }),
    }
}

/// Array access. Indices outside `[0, len)` (including negative ones) yield
/// null, not an error.
fn eval_array_index(elements: &[Value], position: i32) -> Value {
    usize::try_from(position).ok()
                             .and_then(|position| elements.get(position))
                             .cloned()
                             .unwrap_or(Value::Null)
}

/// Hash access. The key must be hashable; a missing key yields null, not an
/// error.
fn eval_hash_index(pairs: &HashMap<HashKey, HashPair>, key: &Value) -> EvalResult<Value> {
    let hash_key = key.hash_key()
                      .ok_or(RuntimeError::UnusableHashKey { kind: key.kind() })?;

    Ok(pairs.get(&hash_key).map_or(Value::Null, |pair| pair.value.clone()))
}

/// Evaluates a hash literal into a hash value.
///
/// Pairs evaluate in source order, key before value. Each key must be
/// hashable; the entry retains the original key value so iteration can
/// recover it. A key written twice keeps the later value.
pub(in crate::interpreter::evaluator) fn eval_hash_literal(pairs: &[(Expr, Expr)],
                                                           env: &Rc<Environment>)
                                                           -> EvalResult<Value> {
    let mut map = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval(key_expr, env)?;
        let hash_key = key.hash_key()
                          .ok_or(RuntimeError::UnusableHashKey { kind: key.kind() })?;

        let value = eval(value_expr, env)?;
        map.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(map)))
}
