use std::fmt;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code. It is used in the AST to represent literal expressions and as
/// a convenient container for constants during evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 32-bit signed integer literal.
    Integer(i32),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal. The contents are kept as written; no escape
    /// processing is applied.
    Str(String),
}

impl From<i32> for LiteralValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all types of expressions, from literals and variables to
/// function literals, calls, arithmetic, conditionals, arrays, hashes, and
/// indexing. Each variant models a distinct syntactic construct.
///
/// The `Display` implementation produces the canonical debug form used by the
/// parser tests; it makes grouping explicit, so `a + b * c` renders as
/// `(a + (b * c))`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (integer, boolean, or string).
    Literal(LiteralValue),
    /// Reference to a binding by name.
    Variable(String),
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Conditional ("if-then-else") expression.
    IfExpr {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated if the condition is truthy.
        consequence: Block,
        /// Block evaluated if the condition is falsy, when present.
        alternative: Option<Block>,
    },
    /// A function literal such as `fn(x, y) { x + y }`.
    FunctionLiteral {
        /// The parameter names, in declaration order.
        parameters: Vec<String>,
        /// The body block evaluated when the function is called.
        body:       Block,
    },
    /// A call expression; the callee is an arbitrary expression.
    FunctionCall {
        /// Expression producing the callee.
        function:  Box<Self>,
        /// Arguments to the call, in source order.
        arguments: Vec<Self>,
    },
    /// Array literal expression.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
    },
    /// Indexing expression (e.g. `arr[2]` or `hash["key"]`).
    Index {
        /// The value to index into.
        left:  Box<Self>,
        /// The index to access.
        index: Box<Self>,
    },
    /// Hash literal expression such as `{"a": 1}`.
    HashLiteral {
        /// Key/value expression pairs, in source order.
        pairs: Vec<(Self, Self)>,
    },
}

/// Represents a statement.
///
/// Statements are the units collected into a [`Program`] or a [`Block`].
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding declaration using `let`.
    ///
    /// The value is absent when the parser could not produce one because of a
    /// syntax error; the debug form renders the hole as `null`.
    Let {
        /// The declared name.
        name:  String,
        /// The bound value expression, when the parser produced one.
        value: Option<Expr>,
    },
    /// A `return` statement. The value is absent under the same conditions as
    /// for `Let`.
    Return(Option<Expr>),
    /// A standalone expression evaluated for its result.
    Expression(Expr),
}

/// A brace-delimited sequence of statements, as used by function bodies and
/// `if` branches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// The root of a parsed source text: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value: Some(value) } => write!(f, "let {name} = {value};"),
            Self::Let { name, value: None } => write!(f, "let {name} = null;"),
            Self::Return(Some(value)) => write!(f, "return {value};"),
            Self::Return(None) => write!(f, "return null;"),
            Self::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::IfExpr { condition,
                           consequence,
                           alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}){body}", parameters.join(", "))
            },
            Self::FunctionCall { function, arguments } => {
                write!(f, "{function}({})", join_expressions(arguments))
            },
            Self::ArrayLiteral { elements } => write!(f, "[{}]", join_expressions(elements)),
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs } => {
                let pairs = pairs.iter()
                                 .map(|(key, value)| format!("{key} : {value}"))
                                 .collect::<Vec<_>>()
                                 .join(", ");
                write!(f, "{{{pairs}}}")
            },
        }
    }
}

fn join_expressions(expressions: &[Expr]) -> String {
    expressions.iter()
               .map(ToString::to_string)
               .collect::<Vec<_>>()
               .join(", ")
}
