use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::ApiClient;
use crate::auth::login::{self, LoginOutcome};
use crate::auth::session::{get_token, store_token};
use crate::auth::csrf;
use crate::errors::{AppError, render};
use crate::templates_structs::{APP_NAME, LoginTemplate};
use super::see_other;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn login_template(session: &Session, email: &str, error: Option<&str>) -> LoginTemplate {
    LoginTemplate {
        error: error.map(str::to_string),
        app_name: APP_NAME.to_string(),
        csrf_token: csrf::get_or_create_token(session),
        email: email.to_string(),
    }
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // Already logged in
    if get_token(&session).is_some() {
        return Ok(see_other("/"));
    }
    render(login_template(&session, "", None))
}

pub async fn login_submit(
    client: web::Data<ApiClient>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let email = form.email.trim();
    match login::authenticate(&client, email, &form.password).await {
        LoginOutcome::Authenticated { token } => {
            store_token(&session, &token)?;
            log::info!("Session started for {email}");
            Ok(see_other("/"))
        }
        outcome @ LoginOutcome::Failed { .. } => {
            log::warn!("Login failed for {email}: {}", outcome.message());
            render(login_template(&session, email, Some(outcome.message())))
        }
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    log::info!("Session closed");
    Ok(see_other("/login"))
}
