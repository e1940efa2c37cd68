use super::{ApiBody, ApiClient, ApiError, TokenSource};
use crate::models::consulta::DadosAgendamentoConsulta;

/// Scheduling rules (conflicts, notice windows) are enforced by the backend;
/// a violation comes back as a non-2xx status.
pub async fn create(client: &ApiClient, auth: &dyn TokenSource, dados: &DadosAgendamentoConsulta) -> Result<ApiBody, ApiError> {
    client.post(auth, "/consultas", dados).await
}
