use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary, builtin, function, index, unary},
        value::core::{FunctionValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure. The `?` operator is the
/// propagation rule: a failure produced anywhere bubbles through every
/// enclosing evaluation unchanged and becomes the program's result.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program in the given environment.
///
/// Statements run in order. A [`Value::Return`] produced by a top-level
/// `return` is unwrapped here and ends the program; otherwise the value of
/// the last statement is the program's value.
///
/// # Parameters
/// - `program`: The parsed program root.
/// - `env`: The global environment for the run.
///
/// # Returns
/// The program's resulting value.
///
/// # Example
/// ```
/// use monkey_lang::interpreter::{
///     environment::Environment,
///     evaluator::core::eval_program,
///     parser::core::Parser,
///     value::core::Value,
/// };
///
/// let mut parser = Parser::new("let x = 2; x * 3");
/// let program = parser.parse_program();
/// assert!(parser.errors().is_empty());
///
/// let env = Environment::new();
/// assert_eq!(eval_program(&program, &env), Ok(Value::Integer(6)));
/// ```
pub fn eval_program(program: &Program, env: &Rc<Environment>) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Value::Return(inner) => return Ok(*inner),
            value => result = value,
        }
    }

    Ok(result)
}

/// Evaluates a block of statements in the given environment.
///
/// Like [`eval_program`], but a [`Value::Return`] is *not* unwrapped: it is
/// handed upward intact so that nested blocks keep propagating it and only
/// the innermost enclosing function application unwraps it.
pub(in crate::interpreter::evaluator) fn eval_block(block: &Block,
                                                    env: &Rc<Environment>)
                                                    -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        let value = eval_statement(statement, env)?;
        if matches!(value, Value::Return(_)) {
            return Ok(value);
        }
        result = value;
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` binds its evaluated value in the current environment (and yields
/// it), `return` wraps its value in the return sentinel, and an expression
/// statement yields the expression's value.
pub fn eval_statement(statement: &Statement, env: &Rc<Environment>) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = match value {
                Some(expr) => eval(expr, env)?,
                None => Value::Null,
            };
            Ok(env.set(name, value))
        },
        Statement::Return(value) => {
            let value = match value {
                Some(expr) => eval(expr, env)?,
                None => Value::Null,
            };
            Ok(Value::Return(Box::new(value)))
        },
        Statement::Expression(expr) => eval(expr, env),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main entry point for expression evaluation. The evaluator
/// dispatches based on expression variant: literals, variables, unary and
/// binary operations, conditionals, function literals and calls, array and
/// hash literals, and indexing.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `env`: The lexical environment to resolve names against.
///
/// # Returns
/// The computed value.
pub fn eval(expr: &Expr, env: &Rc<Environment>) -> EvalResult<Value> {
    match expr {
        Expr::Literal(value) => Ok(Value::from(value)),
        Expr::Variable(name) => eval_variable(name, env),
        Expr::UnaryOp { op, expr } => {
            let value = eval(expr, env)?;
            unary::eval_unary(*op, &value)
        },
        Expr::BinaryOp { left, op, right } => {
            // Operands evaluate left to right.
            let left = eval(left, env)?;
            let right = eval(right, env)?;
            binary::eval_binary(*op, &left, &right)
        },
        Expr::IfExpr { condition,
                       consequence,
                       alternative, } => {
            let condition = eval(condition, env)?;
            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Value::Null)
            }
        },
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        Rc::clone(env), })))
        },
        Expr::FunctionCall { function, arguments } => {
            let callee = eval(function, env)?;
            let arguments = eval_expressions(arguments, env)?;
            function::apply_function(&callee, arguments)
        },
        Expr::ArrayLiteral { elements } => {
            Ok(Value::Array(Rc::new(eval_expressions(elements, env)?)))
        },
        Expr::Index { left, index } => {
            let left = eval(left, env)?;
            let index = eval(index, env)?;
            index::eval_index(&left, &index)
        },
        Expr::HashLiteral { pairs } => index::eval_hash_literal(pairs, env),
    }
}

/// Resolves a name: the environment chain first, then the builtin table.
fn eval_variable(name: &str, env: &Rc<Environment>) -> EvalResult<Value> {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }
    if let Some(value) = builtin::lookup(name) {
        return Ok(value);
    }
    Err(RuntimeError::UnknownVariable { name: name.to_owned() })
}

/// Evaluates a list of expressions left to right into concrete values.
///
/// Shared by array literals and call argument lists; the first failure stops
/// the walk.
fn eval_expressions(expressions: &[Expr], env: &Rc<Environment>) -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        values.push(eval(expression, env)?);
    }

    Ok(values)
}
