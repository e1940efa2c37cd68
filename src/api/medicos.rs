use super::{ApiBody, ApiClient, ApiError, TokenSource};
use crate::models::medico::{DadosCadastroMedico, DadosListagemMedico};
use crate::models::page::Page;

pub async fn list(
    client: &ApiClient,
    auth: &dyn TokenSource,
    page: i64,
    size: i64,
) -> Result<Page<DadosListagemMedico>, ApiError> {
    client.get(auth, &format!("/medicos?page={page}&size={size}")).await
}

pub async fn list_all(client: &ApiClient, auth: &dyn TokenSource) -> Result<Vec<DadosListagemMedico>, ApiError> {
    super::fetch_all(client, auth, "/medicos").await
}

pub async fn create(client: &ApiClient, auth: &dyn TokenSource, dados: &DadosCadastroMedico) -> Result<ApiBody, ApiError> {
    client.post(auth, "/medicos", dados).await
}
