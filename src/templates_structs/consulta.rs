use askama::Template;
use chrono::NaiveDate;

use super::{PageContext, SelectOption};
use crate::auth::validate::FieldErrors;
use crate::models::consulta::ConsultaForm;
use crate::models::medico::DadosListagemMedico;
use crate::models::paciente::DadosListagemPaciente;

#[derive(Template)]
#[template(path = "consultas/form.html")]
pub struct ConsultaFormTemplate {
    pub ctx: PageContext,
    pub form: ConsultaForm,
    pub errors: FieldErrors,
    pub pacientes: Vec<SelectOption>,
    /// Already narrowed to the chosen especialidade.
    pub medicos: Vec<SelectOption>,
    pub especialidades: Vec<SelectOption>,
    /// Earliest selectable day, `YYYY-MM-DD`.
    pub min_date: String,
}

impl ConsultaFormTemplate {
    pub fn new(
        ctx: PageContext,
        form: ConsultaForm,
        errors: FieldErrors,
        pacientes: &[DadosListagemPaciente],
        medicos: &[DadosListagemMedico],
        today: NaiveDate,
    ) -> Self {
        let pacientes = pacientes
            .iter()
            .map(|p| SelectOption::new(p.id, p.nome.clone(), &form.id_paciente))
            .collect();
        let medicos = medicos
            .iter()
            .map(|m| SelectOption::new(m.id, m.nome.clone(), &form.id_medico))
            .collect();
        let especialidades = SelectOption::especialidades(&form.especialidade);
        Self {
            ctx,
            form,
            errors,
            pacientes,
            medicos,
            especialidades,
            min_date: today.format("%Y-%m-%d").to_string(),
        }
    }
}
