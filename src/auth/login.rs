use serde::Serialize;

use crate::api::{ApiBody, ApiClient, ApiError, NoToken};

pub const INVALID_CREDENTIALS: &str = "Credenciais inválidas. Por favor, tente novamente.";
pub const TOKEN_NOT_RECEIVED: &str = "Token não recebido do servidor.";
pub const SERVER_UNREACHABLE: &str = "Erro ao conectar com o servidor. Tente mais tarde.";
pub const LOGIN_OK: &str = "Login realizado com sucesso!";

#[derive(Serialize)]
struct DadosAutenticacao<'a> {
    login: &'a str,
    senha: &'a str,
}

/// Result of exchanging credentials for a token. Never an error: failures
/// carry the message to show on the login form.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated { token: String },
    Failed { message: &'static str },
}

impl LoginOutcome {
    pub fn success(&self) -> bool {
        matches!(self, LoginOutcome::Authenticated { .. })
    }

    pub fn message(&self) -> &'static str {
        match self {
            LoginOutcome::Authenticated { .. } => LOGIN_OK,
            LoginOutcome::Failed { message } => *message,
        }
    }
}

/// `POST /login` with `{login, senha}`; the backend answers `{token}`.
pub async fn authenticate(client: &ApiClient, login: &str, senha: &str) -> LoginOutcome {
    let body = DadosAutenticacao { login, senha };
    match client.post(&NoToken, "/login", &body).await {
        Ok(ApiBody::Json(value)) => match value.get("token").and_then(|t| t.as_str()) {
            Some(token) if !token.is_empty() => LoginOutcome::Authenticated { token: token.to_string() },
            _ => LoginOutcome::Failed { message: TOKEN_NOT_RECEIVED },
        },
        Ok(_) => LoginOutcome::Failed { message: TOKEN_NOT_RECEIVED },
        Err(ApiError::Status { .. }) => LoginOutcome::Failed { message: INVALID_CREDENTIALS },
        Err(e) => {
            log::error!("Login request failed: {e}");
            LoginOutcome::Failed { message: SERVER_UNREACHABLE }
        }
    }
}
