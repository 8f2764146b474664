use super::condition::Kwargs;
use super::{Query, LIKE_ESCAPE};
use crate::db::Dialect;

/// Renders `kw` as a `where` clause body; `fields` stays empty.
pub fn to_select_query(kw: Vec<Kwargs>, dialect: Dialect) -> Query {
    let mut args = Vec::new();
    let mut placeholders = Vec::new();
    let mut after_condition = false;
    for condition in kw {
        match condition {
            Kwargs::Condition {
                field,
                value,
                comparison_operator,
            } => {
                // adjacent comparisons from one kwargs! call are conjunctive
                if after_condition {
                    placeholders.push("and".to_string());
                }
                after_condition = true;
                args.push(value);
                let placeholder = dialect.placeholder(args.len());
                placeholders.push(comparison(&field, &comparison_operator, &placeholder));
            }
            Kwargs::LogicalOperator { operator } => {
                after_condition = false;
                placeholders.push(operator.to_string());
            }
        }
    }

    Query {
        placeholders: placeholders.join(" "),
        args,
        ..Default::default()
    }
}

/// Renders the column list and the matching `values (...)` body of an insert.
pub fn to_insert_query(kw: Vec<Kwargs>, dialect: Dialect) -> Query {
    let mut args = Vec::new();
    let mut fields = Vec::new();
    let mut placeholders = Vec::new();
    for condition in kw {
        if let Kwargs::Condition { field, value, .. } = condition {
            args.push(value);
            fields.push(field);
            placeholders.push(dialect.placeholder(args.len()));
        }
    }

    Query {
        placeholders: placeholders.join(", "),
        fields: fields.join(", "),
        args,
    }
}

fn comparison(field: &str, operator: &str, placeholder: &str) -> String {
    if operator.eq_ignore_ascii_case("like") {
        format!("{field} like {placeholder} escape '{LIKE_ESCAPE}'")
    } else if operator == "==" {
        format!("{field} = {placeholder}")
    } else {
        format!("{field} {operator} {placeholder}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::query::{And, Kwargs, Or, Value};

    #[test]
    fn select_numbers_placeholders_per_dialect() {
        let kw = kwargs!(name = "Ada", email = "ada@example.com");
        let query = to_select_query(kw, Dialect::Sqlite);
        assert_eq!(query.placeholders, "name = ?1 and email = ?2");

        let kw = kwargs!(name == "Ada").and(kwargs!(id > 3));
        let query = to_select_query(kw, Dialect::Postgres);
        assert_eq!(query.placeholders, "name = $1 and id > $2");
        assert_eq!(
            query.args,
            vec![Value::Text("Ada".into()), Value::Integer(3)]
        );

        let kw = kwargs!(id < 3).or(kwargs!(id >= 10));
        let query = to_select_query(kw, Dialect::MySql);
        assert_eq!(query.placeholders, "id < ? or id >= ?");
    }

    #[test]
    fn like_declares_escape_character() {
        let query = to_select_query(kwargs!(name like "%a!%b%"), Dialect::Sqlite);
        assert_eq!(query.placeholders, "name like ?1 escape '!'");
        assert_eq!(query.args, vec![Value::Text("%a!%b%".into())]);
    }

    #[test]
    fn insert_lists_fields_and_placeholders() {
        let kw = kwargs!(name = "Ada", email = Some("ada@example.com"));
        let query = to_insert_query(kw, Dialect::Sqlite);
        assert_eq!(query.fields, "name, email");
        assert_eq!(query.placeholders, "?1, ?2");
        assert_eq!(query.args.len(), 2);

        let query = to_insert_query(kwargs!(name = None::<String>), Dialect::MySql);
        assert_eq!(query.placeholders, "?");
        assert_eq!(query.args, vec![Value::Null]);
    }

    #[test]
    fn chaining_with_empty_side_adds_no_connective() {
        let kw = Vec::<Kwargs>::new().and(kwargs!(id = 1));
        let query = to_select_query(kw, Dialect::Sqlite);
        assert_eq!(query.placeholders, "id = ?1");
    }
}
