use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Local;

use crate::api::{ApiClient, ApiError, TokenSource, consultas, medicos, pacientes};
use crate::auth::csrf;
use crate::auth::session::{Flash, set_flash};
use crate::auth::validate::FieldErrors;
use crate::errors::{AppError, render};
use crate::models::consulta::{ConsultaForm, filter_medicos};
use crate::models::medico::DadosListagemMedico;
use crate::models::paciente::DadosListagemPaciente;
use crate::templates_structs::{ConsultaFormTemplate, PageContext};
use super::{page_load_error, see_other};

const SCHEDULED: &str = "Consulta agendada com sucesso.";
const SCHEDULE_FAILED: &str = "Não foi possível agendar a consulta. Verifique as regras de agendamento.";
const LOAD_FAILED: &str = "Não foi possível buscar médicos e pacientes.";

/// Patients and doctors for the select boxes, fetched concurrently.
async fn load_options(
    client: &ApiClient,
    auth: &dyn TokenSource,
) -> Result<(Vec<DadosListagemPaciente>, Vec<DadosListagemMedico>), ApiError> {
    tokio::try_join!(pacientes::list_all(client, auth), medicos::list_all(client, auth))
}

async fn render_form(
    client: &ApiClient,
    session: &Session,
    mut ctx: PageContext,
    form: ConsultaForm,
    errors: FieldErrors,
) -> Result<HttpResponse, AppError> {
    let (pacientes, medicos) = match load_options(client, session).await {
        Ok(options) => options,
        Err(e) if e.is_unauthorized() => return Err(page_load_error(session, e)),
        Err(e) => {
            log::error!("Could not load scheduling options: {e}");
            ctx = ctx.with_flash(Flash::error("Erro ao carregar dados", LOAD_FAILED));
            (Vec::new(), Vec::new())
        }
    };
    let medicos = filter_medicos(&medicos, form.especialidade());
    let today = Local::now().date_naive();
    render(ConsultaFormTemplate::new(ctx, form, errors, &pacientes, &medicos, today))
}

/// The form re-renders with `?especialidade=` (and the other fields) when the
/// specialty changes, so the doctor list is always the filtered one.
pub async fn new_form(
    client: web::Data<ApiClient>,
    session: Session,
    query: web::Query<ConsultaForm>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/consultas/nova");
    let mut form = query.into_inner();
    form.csrf_token.clear();
    render_form(&client, &session, ctx, form, FieldErrors::default()).await
}

pub async fn create(
    client: web::Data<ApiClient>,
    session: Session,
    form: web::Form<ConsultaForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let dados = match form.validate(Local::now()) {
        Ok(dados) => dados,
        Err(errors) => {
            let ctx = PageContext::build(&session, "/consultas/nova");
            return render_form(&client, &session, ctx, form, errors).await;
        }
    };

    match consultas::create(&client, &session, &dados).await {
        Ok(_) => {
            log::info!("Scheduled consulta for paciente {} at {}", dados.id_paciente, dados.data);
            set_flash(&session, &Flash::success(SCHEDULED));
            Ok(see_other("/"))
        }
        Err(e) => {
            log::warn!("Backend refused consulta for paciente {}: {e}", dados.id_paciente);
            let ctx = PageContext::build(&session, "/consultas/nova")
                .with_flash(Flash::error("Erro ao agendar", SCHEDULE_FAILED));
            render_form(&client, &session, ctx, form, FieldErrors::default()).await
        }
    }
}
