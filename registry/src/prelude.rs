pub use sqlx::FromRow;

pub use super::db::{
    model::Model,
    query::{And, Kwargs, Or, Value},
    schema::{Column, ColumnKind},
    Database, Dialect, Error,
};
pub use super::{kwargs, types::*};
pub use registry_derive::Model;
