//! Registered users: the `users(id, name, email)` table and the three
//! operations the pages need.

use serde::Serialize;
use sqlx::FromRow;
use tracing::info;

use crate::db::{model::Model, query::escape_like, Database, Error};
use crate::types::Integer;

/// Longest accepted name or email, matching the `varchar(255)` columns.
pub const MAX_FIELD_LEN: usize = 255;

#[derive(registry_derive::Model, FromRow, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[model(table = "users")]
pub struct User {
    #[field(primary_key = true, auto = true)]
    pub id: Integer,

    #[field(size = 255)]
    pub name: String,

    #[field(size = 255)]
    pub email: String,
}

/// A validated registration, ready to insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name field is empty")]
    EmptyName,

    #[error("Email field is empty")]
    EmptyEmail,

    #[error("{field} must be at most {max} characters", max = MAX_FIELD_LEN)]
    TooLong { field: &'static str },
}

/// Raw input of the registration form.
#[derive(Debug, Default, Clone, rocket::FromForm)]
pub struct Registration {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Registration {
    pub fn validate(&self) -> Result<NewUser, ValidationError> {
        let name = self.name.as_deref().unwrap_or_default().trim();
        let email = self.email.as_deref().unwrap_or_default().trim();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if name.chars().count() > MAX_FIELD_LEN {
            return Err(ValidationError::TooLong { field: "Name" });
        }
        if email.chars().count() > MAX_FIELD_LEN {
            return Err(ValidationError::TooLong { field: "Email" });
        }

        Ok(NewUser {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

/// Inserts `new_user`, returning the stored row as far as it is known.
pub async fn register(db: &Database, new_user: NewUser) -> Result<User, Error> {
    let mut user = User {
        name: new_user.name,
        email: new_user.email,
        ..Default::default()
    };
    if let Some(id) = user.save(db).await? {
        user.id = id;
    }
    info!(id = user.id, name = %user.name, "user registered");
    Ok(user)
}

pub async fn list(db: &Database) -> Result<Vec<User>, Error> {
    User::all(db).await
}

/// Users whose name contains `fragment` literally, whitespace included.
/// An empty fragment matches everyone.
pub async fn search(db: &Database, fragment: &str) -> Result<Vec<User>, Error> {
    if fragment.is_empty() {
        return User::all(db).await;
    }
    User::filter(kwargs!(name like name_pattern(fragment)), db).await
}

fn name_pattern(fragment: &str) -> String {
    format!("%{}%", escape_like(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> Registration {
        Registration {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
        }
    }

    #[test]
    fn validation_trims_fields() {
        let new_user = form("  Ada Lovelace ", " ada@example.com").validate().unwrap();
        assert_eq!(new_user.name, "Ada Lovelace");
        assert_eq!(new_user.email, "ada@example.com");
    }

    #[test]
    fn validation_rejects_empty_fields() {
        assert_eq!(form("", "a@b").validate(), Err(ValidationError::EmptyName));
        assert_eq!(form("   ", "a@b").validate(), Err(ValidationError::EmptyName));
        assert_eq!(form("Ada", "").validate(), Err(ValidationError::EmptyEmail));
        assert_eq!(
            Registration::default().validate(),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn validation_rejects_oversized_fields() {
        let long = "x".repeat(MAX_FIELD_LEN + 1);
        assert_eq!(
            form(&long, "a@b").validate(),
            Err(ValidationError::TooLong { field: "Name" })
        );
        assert_eq!(
            form("Ada", &long).validate(),
            Err(ValidationError::TooLong { field: "Email" })
        );
        assert!(form(&"x".repeat(MAX_FIELD_LEN), "a@b").validate().is_ok());
    }

    #[test]
    fn name_pattern_matches_literal_substring() {
        assert_eq!(name_pattern("ada"), "%ada%");
        assert_eq!(name_pattern("50%_off"), "%50!%!_off%");
    }

    #[test]
    fn user_model_metadata() {
        assert_eq!(User::TABLE, "users");
        assert_eq!(User::PK, "id");
        let names: Vec<_> = User::COLUMNS.iter().map(|column| column.name).collect();
        assert_eq!(names, ["id", "name", "email"]);
        assert!(!User::COLUMNS[0].is_insertable());
    }
}
