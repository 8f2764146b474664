/// Builds a vector of `Kwargs::Condition` from field/value pairs.
///
/// Two forms are supported:
///
/// * `kwargs!(field1 = value1, field2 = value2)` for equality, used for
///   inserts and simple filters;
/// * `kwargs!(field op value)` with `op` one of `==`, `!=`, `<`, `<=`, `>`,
///   `>=` or `like`.
///
/// # Example
///
/// ```
/// use registry::prelude::*;
///
/// let conditions = kwargs!(name = "Ada", email = "ada@example.com");
/// assert_eq!(conditions.len(), 2);
///
/// let conditions = kwargs!(id >= 10).and(kwargs!(name like "%da%"));
/// assert_eq!(conditions.len(), 3);
/// ```
#[macro_export]
macro_rules! kwargs {
    ($($field:ident = $value:expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut args: Vec<$crate::db::query::Kwargs> = Vec::new();
            $(
                args.push($crate::db::query::Kwargs::Condition {
                    field: stringify!($field).to_string(),
                    value: $crate::db::query::Value::from($value),
                    comparison_operator: "=".to_string(),
                });
            )*
            args
        }
    };

    ($field:ident $op:tt $value:expr) => {
        {
            vec![
                $crate::db::query::Kwargs::Condition {
                    field: stringify!($field).to_string(),
                    value: $crate::db::query::Value::from($value),
                    comparison_operator: stringify!($op).to_string(),
                }
            ]
        }
    };
}

/// Binds every `Value` of `$args` onto a sqlx query or query_as stream.
macro_rules! binds {
    ($args:expr, $stream:expr) => {{
        for arg in $args {
            $stream = match arg {
                $crate::db::query::Value::Integer(value) => $stream.bind(value),
                $crate::db::query::Value::Text(value) => $stream.bind(value),
                $crate::db::query::Value::Null => $stream.bind(Option::<String>::None),
            };
        }
    }};
}
