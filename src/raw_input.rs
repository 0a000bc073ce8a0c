use std::fmt;

static NIL: RawValue = RawValue::Nil;

/// Loosely typed value as handed over by a caller before validation.
///
/// `Symbol` is an interned identifier (a GDScript `StringName` such as
/// `&"launch"`); `Str` is ordinary text. Actions must be symbols, body
/// names must be strings. `Other` holds the printed form of any value
/// that fits none of the above.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Symbol(String),
    List(Vec<RawValue>),
    Other(String),
}

impl RawValue {
    pub fn str(s: &str) -> Self {
        RawValue::Str(s.to_string())
    }

    pub fn symbol(s: &str) -> Self {
        RawValue::Symbol(s.to_string())
    }

    /// A two-element `[action, body]` step
    pub fn step(action: RawValue, body: RawValue) -> Self {
        RawValue::List(vec![action, body])
    }

    /// Numeric value, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Int(n) => Some(*n as f64),
            RawValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Split a flight-path entry into `(action, body)`.
    ///
    /// Lists give their first two elements, padded with `Nil`. Anything else
    /// is taken as the action with no body.
    pub fn as_step_pair(&self) -> (&RawValue, &RawValue) {
        match self {
            RawValue::List(items) => (
                items.first().unwrap_or(&NIL),
                items.get(1).unwrap_or(&NIL),
            ),
            other => (other, &NIL),
        }
    }
}

/// Renders the value the way it appears in error messages; `Nil` is empty.
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Nil => Ok(()),
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Int(n) => write!(f, "{n}"),
            RawValue::Float(x) => write!(f, "{x:?}"),
            RawValue::Str(s) | RawValue::Symbol(s) | RawValue::Other(s) => f.write_str(s),
            RawValue::List(items) => {
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

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Int(n)
    }
}

impl From<f64> for RawValue {
    fn from(x: f64) -> Self {
        RawValue::Float(x)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Nil, Into::into)
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(items: Vec<RawValue>) -> Self {
        RawValue::List(items)
    }
}
