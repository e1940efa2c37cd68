use reqwest::{Client, Method, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// Where the client gets the bearer token for a request from.
pub trait TokenSource {
    fn token(&self) -> Option<String>;
}

/// Anonymous requests (`/login`).
pub struct NoToken;

impl TokenSource for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// A token already in hand.
pub struct BearerToken(pub String);

impl TokenSource for BearerToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// A successful response body, normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    /// 204, or a 2xx with no body.
    Empty,
    Json(serde_json::Value),
    Text(String),
}

impl ApiBody {
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            ApiBody::Json(value) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
            ApiBody::Empty => Err(ApiError::Decode("empty response body".to_string())),
            ApiBody::Text(text) => Err(ApiError::Decode(format!("expected JSON, got text: {text}"))),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// Non-2xx response; `body` is the raw response text.
    Status { status: StatusCode, body: String },
    Transport(reqwest::Error),
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend rejected the session token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { status, body } if body.is_empty() => {
                write!(f, "Erro na API: {}", status.canonical_reason().unwrap_or(status.as_str()))
            }
            ApiError::Status { body, .. } => write!(f, "Erro na API: {body}"),
            ApiError::Transport(e) => write!(f, "Erro ao conectar com a API: {e}"),
            ApiError::Decode(e) => write!(f, "Resposta inesperada da API: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}

/// JSON client for the clinic REST backend.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self { http, base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request. Every request is JSON; a token from `auth`, if any,
    /// goes out as `Authorization: Bearer`.
    pub async fn send(
        &self,
        auth: &dyn TokenSource,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ApiBody, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = auth.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await.map_err(|e| {
            log::error!("Fetch API error: {method} {path}: {e}");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!(
                "API error: {} {} ({method} {path}) {body}",
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
            );
            return Err(ApiError::Status { status, body });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(ApiBody::Empty);
        }
        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        let text = response.text().await?;
        if text.is_empty() {
            return Ok(ApiBody::Empty);
        }
        if is_json {
            return serde_json::from_str(&text)
                .map(ApiBody::Json)
                .map_err(|e| ApiError::Decode(e.to_string()));
        }
        Ok(ApiBody::Text(text))
    }

    pub async fn get<T: DeserializeOwned>(&self, auth: &dyn TokenSource, path: &str) -> Result<T, ApiError> {
        self.send(auth, Method::GET, path, None).await?.decode()
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        auth: &dyn TokenSource,
        path: &str,
        payload: &B,
    ) -> Result<ApiBody, ApiError> {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(auth, Method::POST, path, Some(&body)).await
    }
}
