//! Single prop values.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::store::Dispatch;

/// A zero-argument callback prop, e.g. `increment`.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the callback.
    pub fn call(&self) {
        (self.0)();
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// One prop value.
///
/// Plain data is carried as JSON. Capabilities (dispatch handles and
/// callbacks) compare by identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Prop {
    /// Plain data.
    Value(Value),
    /// A dispatch capability.
    Dispatch(Dispatch),
    /// A callback.
    Callback(Callback),
}

impl Prop {
    /// The JSON value, if this is a data prop.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Prop::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The string, if this is a string data prop.
    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }

    /// The dispatch handle, if this is a dispatch prop.
    pub fn as_dispatch(&self) -> Option<&Dispatch> {
        match self {
            Prop::Dispatch(dispatch) => Some(dispatch),
            _ => None,
        }
    }

    /// The callback, if this is a callback prop.
    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            Prop::Callback(callback) => Some(callback),
            _ => None,
        }
    }
}

impl From<Value> for Prop {
    fn from(value: Value) -> Self {
        Prop::Value(value)
    }
}

impl From<&str> for Prop {
    fn from(value: &str) -> Self {
        Prop::Value(Value::from(value))
    }
}

impl From<String> for Prop {
    fn from(value: String) -> Self {
        Prop::Value(Value::from(value))
    }
}

impl From<bool> for Prop {
    fn from(value: bool) -> Self {
        Prop::Value(Value::from(value))
    }
}

impl From<i32> for Prop {
    fn from(value: i32) -> Self {
        Prop::Value(Value::from(value))
    }
}

impl From<u64> for Prop {
    fn from(value: u64) -> Self {
        Prop::Value(Value::from(value))
    }
}

impl From<i64> for Prop {
    fn from(value: i64) -> Self {
        Prop::Value(Value::from(value))
    }
}

impl From<f64> for Prop {
    fn from(value: f64) -> Self {
        Prop::Value(Value::from(value))
    }
}

impl From<Dispatch> for Prop {
    fn from(dispatch: Dispatch) -> Self {
        Prop::Dispatch(dispatch)
    }
}

impl From<Callback> for Prop {
    fn from(callback: Callback) -> Self {
        Prop::Callback(callback)
    }
}
