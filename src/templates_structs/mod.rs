// Template context structures for Askama templates, organized by resource.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{Flash, take_flash};

pub const APP_NAME: &str = "Voll.med";

const NAVIGATION: [(&str, &str); 4] = [
    ("/", "Dashboard"),
    ("/medicos", "Médicos"),
    ("/pacientes", "Pacientes"),
    ("/consultas/nova", "Agendar Consulta"),
];

pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub is_active: bool,
}

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.csrf_token`, `ctx.nav_items`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub flash: Option<Flash>,
    pub nav_items: Vec<NavItem>,
}

impl PageContext {
    /// Consumes any pending flash message from the session.
    pub fn build(session: &Session, current_path: &str) -> Self {
        let nav_items = NAVIGATION
            .iter()
            .map(|&(href, label)| NavItem { href, label, is_active: is_active(href, current_path) })
            .collect();
        Self {
            app_name: APP_NAME.to_string(),
            csrf_token: csrf::get_or_create_token(session),
            flash: take_flash(session),
            nav_items,
        }
    }

    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }
}

fn is_active(href: &str, current_path: &str) -> bool {
    if href == "/" {
        return current_path == "/";
    }
    current_path == href || current_path.starts_with(&format!("{href}/"))
}

mod common;
mod consulta;
mod dashboard;
mod medico;
mod paciente;

pub use self::common::{LoginTemplate, SelectOption};
pub use self::consulta::ConsultaFormTemplate;
pub use self::dashboard::{DashboardTemplate, FeatureCard};
pub use self::medico::{MedicoFormTemplate, MedicoListTemplate};
pub use self::paciente::{PacienteFormTemplate, PacienteListTemplate};
