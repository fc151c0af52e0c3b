use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::{Block, LiteralValue},
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        value::hash::{HashKey, HashPair},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns, and conditional evaluations. Aggregates are
/// `Rc`-backed so that values stay cheap to clone as they move through the
/// evaluator and in and out of environments.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 32-bit signed integer value.
    Integer(i32),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// An immutable string value.
    Str(String),
    /// The absence of a value. Produced by `if` expressions without a taken
    /// branch and by misses on array and hash indexing.
    Null,
    /// Wrapper produced by `return` statements. Blocks pass it upward
    /// untouched; only the program root and function application unwrap it,
    /// so a `return` unwinds exactly the innermost enclosing function.
    Return(Box<Self>),
    /// A function value: parameter list, body, and the environment captured
    /// when the literal was evaluated.
    Function(Rc<FunctionValue>),
    /// A built-in function provided by the interpreter.
    Builtin(BuiltinFunction),
    /// An array of values. Elements may be of any kind.
    Array(Rc<Vec<Self>>),
    /// A hash map from hashable values to arbitrary values.
    Hash(Rc<HashMap<HashKey, HashPair>>),
}

/// The payload of a [`Value::Function`]: a closure.
///
/// The environment recorded here is the lexical scope that existed at the
/// moment the function literal was evaluated. Each call creates a fresh frame
/// enclosed in it, which is what makes returned functions remember their
/// definition-site bindings.
#[derive(Clone)]
pub struct FunctionValue {
    /// Parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The body block evaluated on application.
    pub body:       Block,
    /// The captured definition-site environment.
    pub env:        Rc<Environment>,
}

// The captured environment may contain this very function; walking it here
// would recurse without end.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .finish_non_exhaustive()
    }
}

/// A built-in function: a name for error messages and a plain function
/// pointer taking the evaluated argument list.
#[derive(Clone, Copy)]
pub struct BuiltinFunction {
    /// The name the builtin is reachable under.
    pub name: &'static str,
    /// The native implementation.
    pub func: fn(&[Value]) -> EvalResult<Value>,
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinFunction")
         .field("name", &self.name)
         .finish_non_exhaustive()
    }
}

impl Value {
    /// The kind name used by runtime error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INT",
            Self::Bool(_) => "BOOL",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Return(_) => "RETURN",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
        }
    }

    /// Whether the value counts as true in condition position.
    ///
    /// Only `Null` and `false` are falsy. Everything else, including the
    /// integer zero and the empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use monkey_lang::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality on the value sum.
    ///
    /// Integers, booleans, strings, nulls, arrays, and hashes compare by
    /// contents. Function values compare by identity of their shared backing
    /// allocation and builtins by name; two separately constructed functions
    /// are never equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Null, Self::Null) => true,
            (Self::Return(l), Self::Return(r)) => l == r,
            (Self::Array(l), Self::Array(r)) => l == r,
            (Self::Hash(l), Self::Hash(r)) => l == r,
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Builtin(l), Self::Builtin(r)) => l.name == r.name,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// The inspect form: what the REPL prints for a result.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Return(inner) => write!(f, "{inner}"),
            Self::Function(function) => {
                write!(f, "fn({}) {{\n{}\n}}", function.parameters.join(", "), function.body)
            },
            Self::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
        }
    }
}
