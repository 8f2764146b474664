use std::fmt;

use super::Error;

/// SQL flavour of the server behind the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    MySql,
    Postgres,
}

impl Dialect {
    pub fn from_url(url: &str) -> Result<Self, Error> {
        let scheme = url.split_once(':').map(|(scheme, _)| scheme).unwrap_or_default();
        match scheme.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Dialect::Sqlite),
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            _ => Err(Error::UnsupportedUrl(url.to_string())),
        }
    }

    /// Bind parameter for the `index`-th (1-based) argument of a statement.
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Sqlite => format!("?{index}"),
            Dialect::MySql => "?".to_string(),
            Dialect::Postgres => format!("${index}"),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Sqlite => "sqlite",
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_dialect_from_scheme() {
        assert_eq!(Dialect::from_url("sqlite::memory:").unwrap(), Dialect::Sqlite);
        assert_eq!(
            Dialect::from_url("mysql://demo:demo123@db/registry").unwrap(),
            Dialect::MySql
        );
        assert_eq!(Dialect::from_url("mariadb://db/registry").unwrap(), Dialect::MySql);
        assert_eq!(
            Dialect::from_url("postgresql://localhost/registry").unwrap(),
            Dialect::Postgres
        );
    }

    #[test]
    fn rejects_unknown_scheme() {
        let err = Dialect::from_url("mssql://db/registry").unwrap_err();
        assert!(matches!(err, Error::UnsupportedUrl(url) if url == "mssql://db/registry"));
        assert!(Dialect::from_url("registry").is_err());
    }

    #[test]
    fn placeholders_follow_dialect() {
        assert_eq!(Dialect::Sqlite.placeholder(2), "?2");
        assert_eq!(Dialect::MySql.placeholder(2), "?");
        assert_eq!(Dialect::Postgres.placeholder(2), "$2");
    }
}
