use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A single lexical scope frame: a name-to-value map plus an optional outer
/// frame.
///
/// Lookups walk outward until a name is found or the chain is exhausted;
/// writes always go to the innermost frame. Function application builds an
/// enclosed frame whose outer is the called function's *captured* environment
/// rather than the caller's, which is what gives closures their
/// definition-site bindings.
///
/// Frames are shared through `Rc` because a closure must keep its captured
/// chain alive after the call that created it has returned. A closure bound
/// inside its own captured frame forms a reference cycle that is only
/// reclaimed at process exit.
///
/// # Example
/// ```
/// use monkey_lang::interpreter::{environment::Environment, value::core::Value};
///
/// let global = Environment::new();
/// global.set("x", Value::Integer(1));
///
/// let inner = Environment::enclosed(global.clone());
/// inner.set("y", Value::Integer(2));
///
/// assert_eq!(inner.get("x"), Some(Value::Integer(1)));
/// assert_eq!(inner.get("y"), Some(Value::Integer(2)));
/// assert_eq!(global.get("y"), None);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    store: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates the outermost (global) frame.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates a fresh frame whose lookups fall back to `outer`.
    #[must_use]
    pub fn enclosed(outer: Rc<Self>) -> Rc<Self> {
        Rc::new(Self { store: RefCell::new(HashMap::new()),
                       outer: Some(outer), })
    }

    /// Looks up a name, searching this frame first and then the outer chain.
    ///
    /// # Returns
    /// The bound value, or `None` when no frame in the chain binds the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.borrow().get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds a name in this frame, shadowing any outer binding of the same
    /// name, and returns the bound value.
    pub fn set(&self, name: &str, value: Value) -> Value {
        self.store.borrow_mut().insert(name.to_owned(), value.clone());
        value
    }
}
