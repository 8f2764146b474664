pub mod builder;
pub mod condition;

pub use condition::{And, Kwargs, Or};

/// Escape character used by `like` conditions.
pub const LIKE_ESCAPE: char = '!';

/// A value bound to a statement parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Text(String),
    Null,
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Statement fragments produced by the builders.
#[derive(Debug, Default)]
pub struct Query {
    pub placeholders: String,
    pub fields: String,
    pub args: Vec<Value>,
}

/// Escapes `%`, `_` and the escape character so `fragment` matches literally
/// inside a `like` pattern.
pub fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("ada"), "ada");
        assert_eq!(escape_like("100%"), "100!%");
        assert_eq!(escape_like("a_b!c"), "a!_b!!c");
        assert_eq!(escape_like(""), "");
    }

    #[test]
    fn optional_values_become_null() {
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(Value::from(Some(7)), Value::Integer(7));
        assert_eq!(Value::from(Some("x")), Value::Text("x".into()));
    }
}
