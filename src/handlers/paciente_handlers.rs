use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api::{ApiClient, pacientes};
use crate::auth::csrf;
use crate::auth::session::{Flash, set_flash};
use crate::auth::validate::FieldErrors;
use crate::errors::{AppError, render};
use crate::models::paciente::PacienteForm;
use crate::models::page::{ListQuery, Pagination};
use crate::templates_structs::{PacienteFormTemplate, PacienteListTemplate, PageContext};
use super::{page_load_error, see_other};

const CREATED: &str = "Paciente cadastrado com sucesso.";
const CREATE_FAILED: &str = "Não foi possível cadastrar o paciente. Tente novamente.";

pub async fn list(
    client: web::Data<ApiClient>,
    session: Session,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/pacientes");
    let request = query.page_request();
    let data = pacientes::list(&client, &session, request.page, request.size)
        .await
        .map_err(|e| page_load_error(&session, e))?;

    let pagination = Pagination::of(&data).view(req.path(), req.query_string());
    render(PacienteListTemplate { ctx, pacientes: data.content, pagination })
}

pub async fn new_form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/pacientes");
    render(PacienteFormTemplate { ctx, form: PacienteForm::default(), errors: FieldErrors::default() })
}

pub async fn create(
    client: web::Data<ApiClient>,
    session: Session,
    form: web::Form<PacienteForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let dados = match form.validate() {
        Ok(dados) => dados,
        Err(errors) => {
            let ctx = PageContext::build(&session, "/pacientes");
            return render(PacienteFormTemplate { ctx, form, errors });
        }
    };

    match pacientes::create(&client, &session, &dados).await {
        Ok(_) => {
            log::info!("Created paciente {}", dados.nome);
            set_flash(&session, &Flash::success(CREATED));
            Ok(see_other("/pacientes"))
        }
        Err(e) => {
            log::warn!("Could not create paciente {}: {e}", dados.nome);
            let ctx = PageContext::build(&session, "/pacientes")
                .with_flash(Flash::error("Erro ao cadastrar", CREATE_FAILED));
            render(PacienteFormTemplate { ctx, form, errors: FieldErrors::default() })
        }
    }
}
