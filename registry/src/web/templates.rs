//! Askama templates for the pages. Every template extends `base.html`, so
//! all interpolated values are HTML-escaped.

use askama::Template;

use crate::users::User;

/// Registration form, optionally re-rendered with an error and the
/// previously submitted values.
#[derive(Template, Default)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub error: Option<String>,
    pub name: String,
    pub email: String,
}

#[derive(Template)]
#[template(path = "registered.html")]
pub struct RegisteredPage {
    pub user: User,
}

#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportPage {
    pub users: Vec<User>,
}

#[derive(Template)]
#[template(path = "search_form.html")]
pub struct SearchFormPage;

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchPage {
    pub query: String,
    pub users: Vec<User>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: &'static str,
    pub message: String,
}

impl ErrorPage {
    pub fn new(title: &'static str, message: String) -> Self {
        Self { title, message }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub path: String,
}
