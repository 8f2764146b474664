//! HTTP surface: the registration, report and search pages plus a small
//! JSON listing.

use rocket::{Build, Rocket};

use crate::Database;

mod pages;
pub mod templates;

/// Assembles the Rocket instance serving every page from `database`.
pub fn build(database: Database) -> Rocket<Build> {
    rocket::build()
        .manage(database)
        .mount(
            "/",
            rocket::routes![
                pages::index,
                pages::register,
                pages::report,
                pages::search_form,
                pages::search,
                pages::api_users,
            ],
        )
        .register("/", rocket::catchers![pages::not_found])
}
