use super::{ApiBody, ApiClient, ApiError, TokenSource};
use crate::models::paciente::{DadosCadastroPaciente, DadosListagemPaciente};
use crate::models::page::Page;

pub async fn list(
    client: &ApiClient,
    auth: &dyn TokenSource,
    page: i64,
    size: i64,
) -> Result<Page<DadosListagemPaciente>, ApiError> {
    client.get(auth, &format!("/pacientes?page={page}&size={size}")).await
}

pub async fn list_all(client: &ApiClient, auth: &dyn TokenSource) -> Result<Vec<DadosListagemPaciente>, ApiError> {
    super::fetch_all(client, auth, "/pacientes").await
}

pub async fn create(client: &ApiClient, auth: &dyn TokenSource, dados: &DadosCadastroPaciente) -> Result<ApiBody, ApiError> {
    client.post(auth, "/pacientes", dados).await
}
