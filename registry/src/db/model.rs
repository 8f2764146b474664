//! Database model operations.
//!
//! Every operation acquires its own pooled connection first, so a failure
//! to reach the server is reported as [`Error::Connection`] and anything
//! after that as [`Error::Query`].

use sqlx::{any::AnyRow, FromRow, Row};
use tracing::debug;

use super::query::{builder, Kwargs};
use super::schema::{self, Column};
use super::{Database, Dialect, Error, FutRes};

/// Trait for database model operations.
#[async_trait::async_trait]
pub trait Model: Sized + Send + Sync + Unpin + for<'r> FromRow<'r, AnyRow> {
    const TABLE: &'static str;
    const PK: &'static str;
    const COLUMNS: &'static [Column];

    /// Creates the model table if it does not exist yet.
    ///
    /// # Example
    /// ```ignore
    /// User::migrate(&database).await?;
    /// ```
    fn migrate(db: &'_ Database) -> FutRes<'_, (), Error> {
        Box::pin(async move {
            let ddl = schema::create_table_sql(Self::TABLE, Self::COLUMNS, db.dialect());
            debug!(
                table = Self::TABLE,
                "migrating\n{}",
                sqlformat::format(
                    &ddl,
                    &sqlformat::QueryParams::None,
                    &sqlformat::FormatOptions::default(),
                )
            );

            let mut conn = db.acquire().await?;
            sqlx::query(&ddl).execute(&mut *conn).await?;
            Ok(())
        })
    }

    /// Inserts the current instance, skipping the auto-incremented key.
    ///
    /// Returns the generated primary key.
    ///
    /// # Example
    /// ```ignore
    /// let user = User {
    ///     name: "Ada".to_string(),
    ///     email: "ada@example.com".to_string(),
    ///     ..Default::default()
    /// };
    /// let id = user.save(&database).await?;
    /// ```
    async fn save(&self, db: &Database) -> Result<Option<i64>, Error>;

    /// Inserts a row built from the given column/value pairs.
    ///
    /// # Example
    /// ```ignore
    /// User::create(kwargs!(name = "Ada", email = "ada@example.com"), &database).await?;
    /// ```
    async fn create(kw: Vec<Kwargs>, db: &Database) -> Result<Option<i64>, Error> {
        let insert_query = builder::to_insert_query(kw, db.dialect());

        let insert = format!(
            "insert into {table} ({fields}) values ({placeholders})",
            table = Self::TABLE,
            fields = insert_query.fields,
            placeholders = insert_query.placeholders,
        );

        let mut conn = db.acquire().await?;
        match db.dialect() {
            // only the MySQL driver reports the generated key through `Any`
            Dialect::MySql => {
                let mut stream = sqlx::query(&insert);
                binds!(insert_query.args, stream);
                let result = stream.execute(&mut *conn).await?;
                Ok(result.last_insert_id())
            }
            Dialect::Sqlite | Dialect::Postgres => {
                let query = format!("{insert} returning {pk};", pk = Self::PK);
                let mut stream = sqlx::query(&query);
                binds!(insert_query.args, stream);
                let row = stream.fetch_one(&mut *conn).await?;
                Ok(row.try_get::<Option<i64>, _>(0)?)
            }
        }
    }

    /// Retrieves every row, ordered by primary key.
    ///
    /// # Example
    /// ```ignore
    /// let users = User::all(&database).await?;
    /// ```
    async fn all(db: &Database) -> Result<Vec<Self>, Error> {
        let query = format!(
            "select {columns} from {table} order by {pk};",
            columns = schema::column_list(Self::COLUMNS),
            table = Self::TABLE,
            pk = Self::PK,
        );

        let mut conn = db.acquire().await?;
        Ok(sqlx::query_as::<_, Self>(&query)
            .fetch_all(&mut *conn)
            .await?)
    }

    /// Retrieves the rows matching `kw`, ordered by primary key.
    ///
    /// An empty `kw` matches every row.
    ///
    /// # Example
    /// ```ignore
    /// let users = User::filter(kwargs!(name like "%ada%"), &database).await?;
    /// ```
    async fn filter(kw: Vec<Kwargs>, db: &Database) -> Result<Vec<Self>, Error> {
        let select_query = builder::to_select_query(kw, db.dialect());
        let condition = if select_query.placeholders.is_empty() {
            String::new()
        } else {
            format!(" where {}", select_query.placeholders)
        };

        let query = format!(
            "select {columns} from {table}{condition} order by {pk};",
            columns = schema::column_list(Self::COLUMNS),
            table = Self::TABLE,
            pk = Self::PK,
        );

        let mut conn = db.acquire().await?;
        let mut stream = sqlx::query_as::<_, Self>(&query);
        binds!(select_query.args, stream);
        Ok(stream.fetch_all(&mut *conn).await?)
    }

    /// Counts the rows of the model table.
    async fn count(db: &Database) -> Result<i64, Error> {
        let query = format!("select count(*) from {table};", table = Self::TABLE);
        let mut conn = db.acquire().await?;
        let row = sqlx::query(&query).fetch_one(&mut *conn).await?;
        Ok(row.try_get(0)?)
    }
}
