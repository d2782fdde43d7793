//! Runtime values.

use std::fmt;
use std::rc::Rc;

use trud_ir::MatchExpr;

/// A runtime value.
///
/// Values are immutable. Strings and tuples are reference counted so
/// binding and passing them around never copies the contents.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Str(Rc<str>),
    Bool(bool),
    Null,
    Tuple(Rc<[Value]>),
    Function(Rc<FunctionValue>),
}

/// A function: parameter names plus the match expression that is its body.
///
/// Functions capture nothing. A call sees its own parameters and the
/// globals, never the locals of the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionValue {
    pub name: String,
    pub params: Vec<String>,
    pub body: Rc<MatchExpr>,
}

impl FunctionValue {
    /// Name given to functions produced by a bare `match` expression.
    pub const ANONYMOUS: &'static str = "<anonymous>";

    pub fn new(name: impl Into<String>, params: Vec<String>, body: Rc<MatchExpr>) -> Self {
        FunctionValue {
            name: name.into(),
            params,
            body,
        }
    }

    /// Build the anonymous function a bare `match` evaluates to.
    pub fn anonymous(body: Rc<MatchExpr>) -> Self {
        let params = body.param_names().map(str::to_string).collect();
        Self::new(Self::ANONYMOUS, params, body)
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Value {
    #[inline]
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    #[inline]
    pub fn tuple(elements: Vec<Value>) -> Self {
        Value::Tuple(elements.into())
    }

    #[inline]
    pub fn function(f: FunctionValue) -> Self {
        Value::Function(Rc::new(f))
    }

    /// Type name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Tuple(_) => "tuple",
            Value::Function(_) => "function",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Nested rendering: strings are quoted so `("a", 1)` stays unambiguous.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", &**s),
            other => write!(f, "{other}"),
        }
    }
}

/// Numbers print in their shortest form (`7`, `0.5`, `inf`); strings print
/// bare at the top level and quoted inside tuples.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Tuple(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    element.fmt_nested(f)?;
                }
                f.write_str(")")
            }
            Value::Function(func) => write!(f, "<function {}>", func.name),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
