use actix_web::{middleware::from_fn, web};

use crate::auth::middleware::require_auth;
use crate::handlers::{
    auth_handlers, consulta_handlers, dashboard, medico_handlers, not_found, paciente_handlers,
};

/// Register every route of the front-end.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Static files
        .service(actix_files::Files::new("/static", "./static"))
        // Public routes
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        // Protected routes
        .service(
            web::scope("")
                .wrap(from_fn(require_auth))
                .route("/", web::get().to(dashboard::index))
                .route("/logout", web::post().to(auth_handlers::logout))
                // /medicos/novo and /pacientes/novo are literal segments, no conflicts
                .route("/medicos", web::get().to(medico_handlers::list))
                .route("/medicos/novo", web::get().to(medico_handlers::new_form))
                .route("/medicos", web::post().to(medico_handlers::create))
                .route("/pacientes", web::get().to(paciente_handlers::list))
                .route("/pacientes/novo", web::get().to(paciente_handlers::new_form))
                .route("/pacientes", web::post().to(paciente_handlers::create))
                .route("/consultas/nova", web::get().to(consulta_handlers::new_form))
                .route("/consultas", web::post().to(consulta_handlers::create)),
        )
        // Default 404 handler
        .default_service(web::to(not_found));
}
