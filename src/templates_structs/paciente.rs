use askama::Template;

use super::PageContext;
use crate::auth::validate::FieldErrors;
use crate::models::paciente::{DadosListagemPaciente, PacienteForm};
use crate::models::page::PaginationView;

#[derive(Template)]
#[template(path = "pacientes/list.html")]
pub struct PacienteListTemplate {
    pub ctx: PageContext,
    pub pacientes: Vec<DadosListagemPaciente>,
    pub pagination: PaginationView,
}

#[derive(Template)]
#[template(path = "pacientes/form.html")]
pub struct PacienteFormTemplate {
    pub ctx: PageContext,
    pub form: PacienteForm,
    pub errors: FieldErrors,
}
