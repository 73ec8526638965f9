use std::{fmt, rc::Rc};

/// Dynamic argument and return value passed through method slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Fixnum(i64),
    Str(Rc<str>),
    Array(Vec<Value>),
}

impl Value {
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[inline]
    pub fn as_fixnum(&self) -> Option<i64> {
        match self {
            Value::Fixnum(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Append to an array value. Returns `false` if `self` is not an array.
    pub fn push(&mut self, value: impl Into<Value>) -> bool {
        match self {
            Value::Array(items) => {
                items.push(value.into());
                true
            }
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Fixnum(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Rc::from(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Fixnum(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_only_into_arrays() {
        let mut log = Value::Array(Vec::new());
        assert!(log.push("a"));
        assert!(log.push(2i64));
        assert_eq!(log.as_array().map(<[Value]>::len), Some(2));

        let mut n = Value::from(1i64);
        assert!(!n.push("a"));
        assert_eq!(n.as_fixnum(), Some(1));
    }

    #[test]
    fn display_nested() {
        let v = Value::from(vec![Value::from("a2"), Value::from(3i64), Value::Nil]);
        assert_eq!(v.to_string(), "[a2, 3, nil]");
    }

    #[test]
    fn default_is_nil() {
        assert!(Value::default().is_nil());
    }
}
