use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error terminates the program's evaluation at the point of
/// failure and is surfaced to the caller verbatim; nothing is retried and
/// nothing is caught.
pub enum RuntimeError {
    /// Tried to read an undefined binding.
    UnknownVariable {
        /// The name that was looked up.
        name: String,
    },
    /// A unary operator was applied to a value kind it does not support.
    UnknownUnaryOperator {
        /// The operator that was applied.
        operator: UnaryOperator,
        /// Kind name of the operand.
        operand:  &'static str,
    },
    /// A binary operator was applied to operands of two different kinds.
    TypeMismatch {
        /// Kind name of the left operand.
        left:     &'static str,
        /// The operator that was applied.
        operator: BinaryOperator,
        /// Kind name of the right operand.
        right:    &'static str,
    },
    /// A binary operator was applied to same-kind operands that do not
    /// support it.
    UnknownBinaryOperator {
        /// Kind name of the left operand.
        left:     &'static str,
        /// The operator that was applied.
        operator: BinaryOperator,
        /// Kind name of the right operand.
        right:    &'static str,
    },
    /// The callee of a call expression is not a function.
    NotCallable {
        /// Inspect form of the value that was called.
        value: String,
    },
    /// A value kind that cannot serve as a hash key was used as one.
    UnusableHashKey {
        /// Kind name of the offending key.
        kind: &'static str,
    },
    /// The index operator was applied to a value that does not support it.
    IndexNotSupported {
        /// Kind name of the indexed value.
        kind: &'static str,
    },
    /// A function or builtin was called with the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments the call supplied.
        got:      usize,
        /// How many arguments were required.
        expected: usize,
    },
    /// A builtin received an argument of a kind it does not support.
    UnsupportedArgument {
        /// Name of the builtin.
        function: &'static str,
        /// Kind name of the offending argument.
        kind:     &'static str,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic operation overflowed the integer range.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Variable {name} not found"),

            Self::UnknownUnaryOperator { operator, operand } => {
                write!(f, "Unknown operator {operator}{operand}")
            },

            Self::TypeMismatch { left, operator, right } => {
                write!(f, "Type mismatch: {left} {operator} {right}")
            },

            Self::UnknownBinaryOperator { left, operator, right } => {
                write!(f, "Unknown operator: {left} {operator} {right}")
            },

            Self::NotCallable { value } => write!(f, "not a function: {value}"),

            Self::UnusableHashKey { kind } => write!(f, "Unusuable as hash key: {kind}"),

            Self::IndexNotSupported { kind } => {
                write!(f, "Index operator not supported: {kind}")
            },

            Self::WrongArgumentCount { got, expected } => {
                write!(f, "Wrong number of args: got {got}, expected {expected}")
            },

            Self::UnsupportedArgument { function, kind } => {
                write!(f, "Argument to `{function}` not supported, got {kind}")
            },

            Self::DivisionByZero => write!(f, "Division by zero"),

            Self::Overflow => write!(f, "Integer overflow while trying to compute result"),
        }
    }
}

impl std::error::Error for RuntimeError {}
