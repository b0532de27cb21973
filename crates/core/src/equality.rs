//! Structural (deep) equality over a dynamic value graph.
//!
//! Value objects expose their content as a [`Value`] snapshot and are compared
//! with [`is_equal`]. Arrays and objects are shared, reference-identified
//! handles, so a graph may point back at itself. The comparison tolerates such
//! cycles instead of recursing forever.
//!
//! ## Cycle tolerance
//!
//! Every array/object reference entered during one comparison is remembered for
//! the rest of that comparison. Meeting a remembered reference again (on either
//! side) counts as a match. Two independently built cyclic graphs of the same
//! shape therefore compare equal, but a difference that is only reachable
//! through an already-visited node is not detected: the result is "equal unless
//! proven different within one pass".

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

/// Shared, mutable sequence handle.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Shared, mutable string-keyed map handle.
pub type ObjectRef = Rc<RefCell<BTreeMap<String, Value>>>;

/// A callable value. Only ever equal to itself (same reference).
#[derive(Clone)]
pub struct Function(Rc<dyn Fn(&[Value]) -> Value>);

impl Function {
    pub fn new(f: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast::<()>()
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        self.addr() == other.addr()
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({:p})", self.addr())
    }
}

/// Dynamic value graph compared by [`is_equal`].
///
/// Primitives are compared strictly (`Null` and `Undefined` are distinct,
/// `Number(NaN)` never equals itself, `Number(42.0)` never equals
/// `String("42")`). Composites are compared by content.
///
/// Integers keep their exact value in `Int`/`UInt`, so ids and counters above
/// 2^53 do not collapse onto the nearest `f64`. Across the numeric variants,
/// values are equal when they denote the same number.
#[derive(Clone)]
pub enum Value {
    /// Absence marker (a missing value, as opposed to an explicit `Null`).
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Number(f64),
    String(String),
    Array(ArrayRef),
    Object(ObjectRef),
    Function(Function),
}

impl Value {
    /// New array handle holding `items`.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// New object handle holding `entries`.
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(Rc::new(RefCell::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        )))
    }

    pub fn empty_array() -> Self {
        Value::array(Vec::new())
    }

    pub fn empty_object() -> Self {
        Value::Object(Rc::new(RefCell::new(BTreeMap::new())))
    }

    pub fn function(f: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Value::Function(Function::new(f))
    }

    /// Snapshot any serializable type through its serde representation.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Value::from)
    }

    /// Insert `key` into an object handle. Returns `false` if `self` is not an object.
    ///
    /// The handle is shared, so this is how self-referential graphs are built:
    /// `node.set("self", node.clone())`.
    pub fn set(&self, key: impl Into<String>, value: Value) -> bool {
        match self {
            Value::Object(map) => {
                map.borrow_mut().insert(key.into(), value);
                true
            }
            _ => false,
        }
    }

    /// Append to an array handle. Returns `false` if `self` is not an array.
    pub fn push(&self, value: Value) -> bool {
        match self {
            Value::Array(items) => {
                items.borrow_mut().push(value);
                true
            }
            _ => false,
        }
    }

    /// Look up `key` on an object handle.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(map) => map.borrow().get(key).cloned(),
            _ => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    fn composite_addr(&self) -> Option<*const ()> {
        match self {
            Value::Array(items) => Some(Rc::as_ptr(items).cast::<()>()),
            Value::Object(map) => Some(Rc::as_ptr(map).cast::<()>()),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Number(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::array(items.into_iter().map(Value::from)),
            serde_json::Value::Object(map) => {
                Value::object(map.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// `==` on values is structural equality.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        is_equal(self, other)
    }
}

/// Deep, cycle-tolerant comparison of two value graphs.
pub fn is_equal(a: &Value, b: &Value) -> bool {
    let mut visited = HashSet::new();
    equal_with(a, b, &mut visited)
}

fn equal_with(a: &Value, b: &Value, visited: &mut HashSet<*const ()>) -> bool {
    if strict_eq(a, b) {
        return true;
    }

    let (Some(addr_a), Some(addr_b)) = (a.composite_addr(), b.composite_addr()) else {
        return false;
    };

    if visited.contains(&addr_a) || visited.contains(&addr_b) {
        return true;
    }
    visited.insert(addr_a);
    visited.insert(addr_b);

    match (a, b) {
        (Value::Array(xs), Value::Array(ys)) => {
            let xs = xs.borrow();
            let ys = ys.borrow();
            xs.len() == ys.len()
                && xs.iter().zip(ys.iter()).all(|(x, y)| equal_with(x, y, visited))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            let xs = xs.borrow();
            let ys = ys.borrow();
            if xs.len() != ys.len() {
                return false;
            }
            xs.iter().all(|(key, x)| match ys.get(key) {
                Some(y) => equal_with(x, y, visited),
                None => false,
            })
        }
        // array vs object
        _ => false,
    }
}

fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::UInt(x), Value::UInt(y)) => x == y,
        (Value::Int(i), Value::UInt(u)) | (Value::UInt(u), Value::Int(i)) => {
            i128::from(*i) == i128::from(*u)
        }
        (Value::Int(i), Value::Number(f)) | (Value::Number(f), Value::Int(i)) => {
            integral(*f) == Some(i128::from(*i))
        }
        (Value::UInt(u), Value::Number(f)) | (Value::Number(f), Value::UInt(u)) => {
            integral(*f) == Some(i128::from(*u))
        }
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => Rc::ptr_eq(x, y),
        (Value::Object(x), Value::Object(y)) => Rc::ptr_eq(x, y),
        (Value::Function(x), Value::Function(y)) => x.ptr_eq(y),
        _ => false,
    }
}

/// Exact integer value of `f`, if it has one. Out-of-range floats saturate and
/// so never match an `i64`/`u64`.
fn integral(f: f64) -> Option<i128> {
    (f.is_finite() && f.fract() == 0.0).then_some(f as i128)
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = RefCell::new(Vec::new());
        fmt::Debug::fmt(&Graph { value: self, path: &path }, f)
    }
}

/// Debug view that prints `[Circular]` instead of re-entering a node on the current path.
struct Graph<'a> {
    value: &'a Value,
    path: &'a RefCell<Vec<*const ()>>,
}

impl fmt::Debug for Graph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addr = match self.value {
            Value::Undefined => return f.write_str("undefined"),
            Value::Null => return f.write_str("null"),
            Value::Bool(b) => return fmt::Debug::fmt(b, f),
            Value::Int(n) => return fmt::Debug::fmt(n, f),
            Value::UInt(n) => return fmt::Debug::fmt(n, f),
            Value::Number(n) => return fmt::Debug::fmt(n, f),
            Value::String(s) => return fmt::Debug::fmt(s, f),
            Value::Function(func) => return fmt::Debug::fmt(func, f),
            Value::Array(_) | Value::Object(_) => match self.value.composite_addr() {
                Some(addr) => addr,
                None => return Ok(()),
            },
        };

        if self.path.borrow().contains(&addr) {
            return f.write_str("[Circular]");
        }
        self.path.borrow_mut().push(addr);

        let result = match self.value {
            Value::Array(items) => {
                let items = items.borrow();
                f.debug_list()
                    .entries(items.iter().map(|value| Graph { value, path: self.path }))
                    .finish()
            }
            Value::Object(map) => {
                let map = map.borrow();
                f.debug_map()
                    .entries(map.iter().map(|(k, value)| (k, Graph { value, path: self.path })))
                    .finish()
            }
            _ => Ok(()),
        };

        self.path.borrow_mut().pop();
        result
    }
}
