//! User registration, report and search pages backed by a relational database.
//!
//! Every page follows the same short flow: acquire one pooled connection,
//! run one statement through the [`db::Model`] layer, render the rows.

extern crate self as registry;

/// This module contains the macros used in the crate.
#[macro_use]
mod macros;

/// Configuration loaded from the environment.
pub mod config;

/// This module contains the database-related functionality.
pub mod db;

pub mod error;

/// This module contains the prelude for the crate.
pub mod prelude;

/// This module contains the custom types used in the crate.
pub mod types;

pub mod users;

pub mod web;

pub use config::Config;
pub use db::{Database, Dialect, Error};

#[doc(hidden)]
pub use async_trait;
#[doc(hidden)]
pub use inventory;
