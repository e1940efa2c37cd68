pub mod auth_handlers;
pub mod consulta_handlers;
pub mod dashboard;
pub mod medico_handlers;
pub mod paciente_handlers;

use actix_session::Session;
use actix_web::HttpResponse;

use crate::api::ApiError;
use crate::errors::AppError;

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Page-load failure. A rejected token ends the session here, so the
/// session middleware answers with a removal cookie instead of re-issuing
/// whatever the handler already wrote (flash taken, CSRF token created).
pub(crate) fn page_load_error(session: &Session, err: ApiError) -> AppError {
    if err.is_unauthorized() {
        session.purge();
    }
    AppError::Api(err)
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}
