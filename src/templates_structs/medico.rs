use askama::Template;

use super::{PageContext, SelectOption};
use crate::auth::validate::FieldErrors;
use crate::models::medico::{DadosListagemMedico, MedicoForm};
use crate::models::page::PaginationView;

#[derive(Template)]
#[template(path = "medicos/list.html")]
pub struct MedicoListTemplate {
    pub ctx: PageContext,
    pub medicos: Vec<DadosListagemMedico>,
    pub pagination: PaginationView,
}

#[derive(Template)]
#[template(path = "medicos/form.html")]
pub struct MedicoFormTemplate {
    pub ctx: PageContext,
    pub form: MedicoForm,
    pub errors: FieldErrors,
    pub especialidades: Vec<SelectOption>,
}

impl MedicoFormTemplate {
    pub fn new(ctx: PageContext, form: MedicoForm, errors: FieldErrors) -> Self {
        let especialidades = SelectOption::especialidades(&form.especialidade);
        Self { ctx, form, errors, especialidades }
    }
}
