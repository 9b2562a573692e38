//! Dynamically-keyed facade over the color-balanced map.
//!
//! Keys arrive as runtime JSON values. The first inserted key fixes the
//! key kind for the whole map; a null key or a key of another kind is
//! rejected before any comparison runs, so the backing comparator only
//! ever sees keys it can totally order.

use std::cmp::Ordering;

use serde_json::Value;

use crate::error::KeyError;
use crate::red_black::RbMap;

/// Kind of JSON scalar a map's keys are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyKind {
    Bool,
    Number,
    String,
}

impl KeyKind {
    fn of(value: &Value) -> Result<Self, KeyError> {
        match value {
            Value::Null => Err(KeyError::NullKey),
            Value::Bool(_) => Ok(Self::Bool),
            Value::Number(_) => Ok(Self::Number),
            Value::String(_) => Ok(Self::String),
            Value::Array(_) => Err(KeyError::TypeMismatch {
                expected: "ordered scalar",
                actual: "array",
            }),
            Value::Object(_) => Err(KeyError::TypeMismatch {
                expected: "ordered scalar",
                actual: "object",
            }),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

/// Total order over keys of one kind. Kinds are validated at the facade
/// boundary, so mixed-kind pairs never reach this point.
fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

/// Ordered map keyed by homogeneous JSON scalars.
pub struct JsonMap<V> {
    inner: RbMap<Value, V, fn(&Value, &Value) -> Ordering>,
    kind: Option<KeyKind>,
}

impl<V> JsonMap<V> {
    pub fn new() -> Self {
        Self {
            inner: RbMap::with_comparator(compare),
            kind: None,
        }
    }

    fn check(&self, key: &Value) -> Result<KeyKind, KeyError> {
        let kind = KeyKind::of(key)?;
        match self.kind {
            Some(expected) if expected != kind => Err(KeyError::TypeMismatch {
                expected: expected.name(),
                actual: kind.name(),
            }),
            _ => Ok(kind),
        }
    }

    pub fn try_insert(&mut self, key: Value, value: V) -> Result<Option<V>, KeyError> {
        let kind = self.check(&key)?;
        let prev = self.inner.insert(key, value);
        self.kind = Some(kind);
        Ok(prev)
    }

    pub fn try_get(&self, key: &Value) -> Result<Option<&V>, KeyError> {
        self.check(key)?;
        Ok(self.inner.get(key))
    }

    pub fn try_remove(&mut self, key: &Value) -> Result<Option<V>, KeyError> {
        self.check(key)?;
        let prev = self.inner.remove(key);
        if self.inner.is_empty() {
            self.kind = None;
        }
        Ok(prev)
    }

    pub fn try_contains_key(&self, key: &Value) -> Result<bool, KeyError> {
        self.check(key)?;
        Ok(self.inner.contains_key(key))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        self.kind = None;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &V)> + '_ {
        self.inner.iter()
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        self.inner.assert_valid()
    }
}

impl<V> Default for JsonMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
