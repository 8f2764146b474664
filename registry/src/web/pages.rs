use askama::Template;
use rocket::{
    catch, form::Form, get, http::Status, post, response::content::RawHtml, serde::json::Json,
    Request, State,
};

use super::templates::{
    IndexPage, NotFoundPage, RegisteredPage, ReportPage, SearchFormPage, SearchPage,
};
use crate::{
    error::{ApiError, PageError},
    users::{self, Registration, User},
    Database,
};

type Page = Result<RawHtml<String>, PageError>;

fn render(template: impl Template) -> Page {
    Ok(RawHtml(template.render()?))
}

#[get("/")]
pub fn index() -> Page {
    render(IndexPage::default())
}

#[post("/register", data = "<form>")]
pub async fn register(
    form: Form<Registration>,
    db: &State<Database>,
) -> Result<(Status, RawHtml<String>), PageError> {
    let new_user = match form.validate() {
        Ok(new_user) => new_user,
        Err(e) => {
            let page = IndexPage {
                error: Some(e.to_string()),
                name: form.name.clone().unwrap_or_default(),
                email: form.email.clone().unwrap_or_default(),
            };
            return Ok((Status::UnprocessableEntity, render(page)?));
        }
    };

    let user = users::register(db, new_user).await?;
    Ok((Status::Ok, render(RegisteredPage { user })?))
}

#[get("/report")]
pub async fn report(db: &State<Database>) -> Page {
    let users = users::list(db).await?;
    render(ReportPage { users })
}

#[get("/searchForm")]
pub fn search_form() -> Page {
    render(SearchFormPage)
}

#[get("/search?<name>")]
pub async fn search(name: Option<String>, db: &State<Database>) -> Page {
    let query = name.unwrap_or_default();
    let users = users::search(db, &query).await?;
    render(SearchPage { query, users })
}

#[get("/api/users?<name>")]
pub async fn api_users(
    name: Option<String>,
    db: &State<Database>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = match name {
        Some(name) => users::search(db, &name).await?,
        None => users::list(db).await?,
    };
    Ok(Json(users))
}

#[catch(404)]
pub fn not_found(request: &Request<'_>) -> RawHtml<String> {
    let page = NotFoundPage {
        path: request.uri().path().to_string(),
    };
    RawHtml(page.render().unwrap_or_else(|_| "Not Found".to_string()))
}
