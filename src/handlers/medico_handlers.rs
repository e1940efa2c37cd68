use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api::{ApiClient, medicos};
use crate::auth::csrf;
use crate::auth::session::{Flash, set_flash};
use crate::auth::validate::FieldErrors;
use crate::errors::{AppError, render};
use crate::models::medico::MedicoForm;
use crate::models::page::{ListQuery, Pagination};
use crate::templates_structs::{MedicoFormTemplate, MedicoListTemplate, PageContext};
use super::{page_load_error, see_other};

const CREATED: &str = "Médico cadastrado com sucesso.";
const CREATE_FAILED: &str = "Não foi possível cadastrar o médico. Tente novamente.";

pub async fn list(
    client: web::Data<ApiClient>,
    session: Session,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/medicos");
    let request = query.page_request();
    let data = medicos::list(&client, &session, request.page, request.size)
        .await
        .map_err(|e| page_load_error(&session, e))?;

    let pagination = Pagination::of(&data).view(req.path(), req.query_string());
    render(MedicoListTemplate { ctx, medicos: data.content, pagination })
}

pub async fn new_form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/medicos");
    render(MedicoFormTemplate::new(ctx, MedicoForm::default(), FieldErrors::default()))
}

pub async fn create(
    client: web::Data<ApiClient>,
    session: Session,
    form: web::Form<MedicoForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let dados = match form.validate() {
        Ok(dados) => dados,
        Err(errors) => {
            let ctx = PageContext::build(&session, "/medicos");
            return render(MedicoFormTemplate::new(ctx, form, errors));
        }
    };

    match medicos::create(&client, &session, &dados).await {
        Ok(_) => {
            log::info!("Created médico CRM {}", dados.crm);
            set_flash(&session, &Flash::success(CREATED));
            Ok(see_other("/medicos"))
        }
        Err(e) => {
            log::warn!("Could not create médico CRM {}: {e}", dados.crm);
            let ctx = PageContext::build(&session, "/medicos")
                .with_flash(Flash::error("Erro ao cadastrar", CREATE_FAILED));
            render(MedicoFormTemplate::new(ctx, form, FieldErrors::default()))
        }
    }
}
