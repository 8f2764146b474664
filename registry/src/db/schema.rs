//! Column metadata emitted by `#[derive(Model)]` and the DDL rendered from it.

use super::Dialect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
    Varchar(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub primary_key: bool,
    pub auto: bool,
    pub unique: bool,
    pub nullable: bool,
}

impl Column {
    /// Whether inserts must supply a value for this column.
    pub fn is_insertable(&self) -> bool {
        !(self.primary_key && self.auto)
    }

    fn definition(&self, dialect: Dialect) -> String {
        let mut parts = vec![self.name.to_string()];

        match (self.kind, self.primary_key && self.auto, dialect) {
            (ColumnKind::Integer, true, Dialect::Postgres) => parts.push("serial".into()),
            (ColumnKind::Integer, _, _) => parts.push("integer".into()),
            (ColumnKind::Text, _, _) => parts.push("text".into()),
            (ColumnKind::Varchar(size), _, _) => parts.push(format!("varchar({size})")),
        }

        if self.primary_key {
            parts.push("primary key".into());
            if self.auto {
                match dialect {
                    Dialect::Sqlite => parts.push("autoincrement".into()),
                    Dialect::MySql => parts.push("auto_increment".into()),
                    Dialect::Postgres => {}
                }
            }
        }
        if self.unique {
            parts.push("unique".into());
        }
        if !self.nullable && !self.primary_key {
            parts.push("not null".into());
        }

        parts.join(" ")
    }
}

pub fn create_table_sql(table: &str, columns: &[Column], dialect: Dialect) -> String {
    let definitions = columns
        .iter()
        .map(|column| column.definition(dialect))
        .collect::<Vec<_>>()
        .join(", ");
    format!("create table if not exists {table} ({definitions});")
}

/// Comma separated column names, in declaration order.
pub fn column_list(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|column| column.name)
        .collect::<Vec<_>>()
        .join(", ")
}
