//! Shared test infrastructure for the integration tests.
//!
//! Every test talks to a stub of the clinic REST backend bound to an
//! ephemeral port, so the real HTTP client and the real handlers run
//! end to end.
//!
//! # Stub backend
//! - `POST /login` issues `TOKEN` for `LOGIN`/`SENHA`
//! - `GET /medicos`, `GET /pacientes` paginate `MEDICO_COUNT` / `PACIENTE_COUNT` rows
//! - `POST /medicos`, `POST /pacientes`, `POST /consultas` record their payloads
//! - extra logins issue tokens that get revoked or break `GET /pacientes`

#![allow(dead_code, unused_macros)]

use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, body::MessageBody, test, web};
use regex::Regex;
use serde::Deserialize;
use serde_json::{Value, json};

use vollmed::auth::session::COOKIE_NAME;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const LOGIN: &str = "user@user.com";
pub const SENHA: &str = "123456";
pub const TOKEN: &str = "stub-token-123";

/// Logs in, but the issued token is rejected by every other endpoint.
pub const EXPIRED_LOGIN: &str = "expirado@user.com";
pub const EXPIRED_TOKEN: &str = "stub-token-expired";

/// Logs in successfully, but the response carries no token.
pub const NO_TOKEN_LOGIN: &str = "semtoken@user.com";

/// Valid until it is used to create one médico, rejected afterwards.
pub const REVOCABLE_LOGIN: &str = "revogavel@user.com";
pub const REVOCABLE_TOKEN: &str = "stub-token-revocable";

/// Valid everywhere, but `GET /pacientes` fails with a 500.
pub const DEGRADED_LOGIN: &str = "degradado@user.com";
pub const DEGRADED_TOKEN: &str = "stub-token-degraded";

/// Name the stub refuses on `POST /medicos` and `POST /pacientes`.
pub const REJECTED_NOME: &str = "Falha";

pub const MEDICO_COUNT: usize = 23;
pub const PACIENTE_COUNT: usize = 7;

/// The stub never returns more rows than this per page.
pub const STUB_MAX_PAGE_SIZE: usize = 20;

pub const ESPECIALIDADES: [&str; 4] = ["ORTOPEDIA", "CARDIOLOGIA", "GINECOLOGIA", "DERMATOLOGIA"];

/// Doctor id the stub refuses to schedule with.
pub const UNAVAILABLE_MEDICO: i64 = 999;

// ============================================================================
// STUB BACKEND
// ============================================================================

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    revoked: Arc<AtomicBool>,
}

impl Recorder {
    fn push(&self, req: &HttpRequest, body: Value) {
        let entry = RecordedRequest {
            method: req.method().to_string(),
            path: req.path().to_string(),
            query: req.query_string().to_string(),
            body,
        };
        self.requests.lock().expect("Recorder lock poisoned").push(entry);
    }

    pub fn all(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("Recorder lock poisoned").clone()
    }

    fn revoke(&self) {
        self.revoked.store(true, Ordering::SeqCst);
    }

    fn is_revoked(&self) -> bool {
        self.revoked.load(Ordering::SeqCst)
    }

    /// JSON payloads posted to `path`, oldest first.
    pub fn posted(&self, path: &str) -> Vec<Value> {
        self.all()
            .into_iter()
            .filter(|r| r.method == "POST" && r.path == path)
            .map(|r| r.body)
            .collect()
    }

    /// Query strings of the GETs to `path`, oldest first.
    pub fn queries(&self, path: &str) -> Vec<String> {
        self.all()
            .into_iter()
            .filter(|r| r.method == "GET" && r.path == path)
            .map(|r| r.query)
            .collect()
    }
}

pub struct Backend {
    pub url: String,
    pub recorder: Recorder,
}

/// Start the stub backend on an ephemeral port. Must be called from inside
/// an actix system (`#[actix_web::test]`).
pub fn spawn_backend() -> Backend {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Stub backend has no local address");
    let recorder = Recorder::default();
    let data = web::Data::new(recorder.clone());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/login", web::post().to(stub_login))
            .route("/medicos", web::get().to(stub_list_medicos))
            .route("/medicos", web::post().to(stub_create_medico))
            .route("/pacientes", web::get().to(stub_list_pacientes))
            .route("/pacientes", web::post().to(stub_create_paciente))
            .route("/consultas", web::post().to(stub_create_consulta))
            .route("/echo-auth", web::get().to(stub_echo_auth))
            .route("/no-content", web::get().to(|| async { HttpResponse::NoContent().finish() }))
            .route("/text", web::get().to(|| async { HttpResponse::Ok().content_type("text/plain").body("pong") }))
            .route("/broken", web::get().to(|| async { HttpResponse::InternalServerError().body("boom") }))
    })
    .workers(1)
    .disable_signals()
    .listen(listener)
    .expect("Failed to listen on stub backend")
    .run();

    actix_rt::spawn(server);

    Backend { url: format!("http://{addr}"), recorder }
}

pub fn medico_nome(id: usize) -> String {
    format!("Médico {id:02}")
}

pub fn medico_especialidade(id: usize) -> &'static str {
    ESPECIALIDADES[(id - 1) % ESPECIALIDADES.len()]
}

pub fn paciente_nome(id: usize) -> String {
    format!("Paciente {id}")
}

fn medicos() -> Vec<Value> {
    (1..=MEDICO_COUNT)
        .map(|id| {
            json!({
                "id": id,
                "nome": medico_nome(id),
                "email": format!("medico{id}@voll.med"),
                "crm": format!("{:06}", 100000 + id),
                "especialidade": medico_especialidade(id),
            })
        })
        .collect()
}

fn pacientes() -> Vec<Value> {
    (1..=PACIENTE_COUNT)
        .map(|id| {
            json!({
                "id": id,
                "nome": paciente_nome(id),
                "email": format!("paciente{id}@email.com"),
                "cpf": format!("123.456.789-0{id}"),
            })
        })
        .collect()
}

fn default_size() -> usize {
    10
}

#[derive(Deserialize)]
struct PageParams {
    #[serde(default)]
    page: usize,
    #[serde(default = "default_size")]
    size: usize,
}

/// Spring-style page envelope, including fields the front-end ignores.
fn paginate(rows: Vec<Value>, params: &PageParams) -> Value {
    let size = params.size.clamp(1, STUB_MAX_PAGE_SIZE);
    let total = rows.len();
    let total_pages = total.div_ceil(size);
    let content: Vec<Value> = rows.into_iter().skip(params.page * size).take(size).collect();
    json!({
        "content": content,
        "size": size,
        "number": params.page,
        "totalPages": total_pages,
        "totalElements": total,
        "first": params.page == 0,
        "last": params.page + 1 >= total_pages,
    })
}

fn bearer(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

fn check_token(recorder: &Recorder, req: &HttpRequest) -> Result<(), HttpResponse> {
    match bearer(req) {
        Some(TOKEN | DEGRADED_TOKEN) => Ok(()),
        Some(REVOCABLE_TOKEN) if !recorder.is_revoked() => Ok(()),
        Some(_) => Err(HttpResponse::Unauthorized().finish()),
        None => Err(HttpResponse::Forbidden().finish()),
    }
}

async fn stub_login(recorder: web::Data<Recorder>, req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    let body = body.into_inner();
    recorder.push(&req, body.clone());
    let login = body["login"].as_str().unwrap_or_default();
    let senha = body["senha"].as_str().unwrap_or_default();
    match (login, senha) {
        (LOGIN, SENHA) => HttpResponse::Ok().json(json!({ "token": TOKEN })),
        (EXPIRED_LOGIN, SENHA) => HttpResponse::Ok().json(json!({ "token": EXPIRED_TOKEN })),
        (NO_TOKEN_LOGIN, SENHA) => HttpResponse::Ok().json(json!({})),
        (REVOCABLE_LOGIN, SENHA) => HttpResponse::Ok().json(json!({ "token": REVOCABLE_TOKEN })),
        (DEGRADED_LOGIN, SENHA) => HttpResponse::Ok().json(json!({ "token": DEGRADED_TOKEN })),
        _ => HttpResponse::Unauthorized().finish(),
    }
}

async fn stub_list_medicos(
    recorder: web::Data<Recorder>,
    req: HttpRequest,
    params: web::Query<PageParams>,
) -> HttpResponse {
    recorder.push(&req, Value::Null);
    if let Err(resp) = check_token(&recorder, &req) {
        return resp;
    }
    HttpResponse::Ok().json(paginate(medicos(), &params))
}

async fn stub_list_pacientes(
    recorder: web::Data<Recorder>,
    req: HttpRequest,
    params: web::Query<PageParams>,
) -> HttpResponse {
    recorder.push(&req, Value::Null);
    if let Err(resp) = check_token(&recorder, &req) {
        return resp;
    }
    if bearer(&req) == Some(DEGRADED_TOKEN) {
        return HttpResponse::InternalServerError().body("pacientes indisponível");
    }
    HttpResponse::Ok().json(paginate(pacientes(), &params))
}

async fn stub_create_medico(recorder: web::Data<Recorder>, req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if let Err(resp) = check_token(&recorder, &req) {
        return resp;
    }
    let body = body.into_inner();
    recorder.push(&req, body.clone());
    if body["nome"] == REJECTED_NOME {
        return HttpResponse::BadRequest().body("CRM já cadastrado");
    }
    if bearer(&req) == Some(REVOCABLE_TOKEN) {
        recorder.revoke();
    }
    HttpResponse::Created().finish()
}

async fn stub_create_paciente(recorder: web::Data<Recorder>, req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if let Err(resp) = check_token(&recorder, &req) {
        return resp;
    }
    let body = body.into_inner();
    recorder.push(&req, body.clone());
    if body["nome"] == REJECTED_NOME {
        return HttpResponse::BadRequest().body("CPF já cadastrado");
    }
    HttpResponse::Created().json(json!({ "id": PACIENTE_COUNT + 1 }))
}

async fn stub_create_consulta(recorder: web::Data<Recorder>, req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if let Err(resp) = check_token(&recorder, &req) {
        return resp;
    }
    let body = body.into_inner();
    recorder.push(&req, body.clone());
    if body["idMedico"] == UNAVAILABLE_MEDICO {
        return HttpResponse::BadRequest().body("Médico não disponível no horário");
    }
    HttpResponse::Ok().json(json!({ "id": 1, "idMedico": body["idMedico"], "data": body["data"] }))
}

async fn stub_echo_auth(req: HttpRequest) -> HttpResponse {
    let auth = req.headers().get("Authorization").and_then(|v| v.to_str().ok());
    HttpResponse::Ok().json(json!({ "authorization": auth }))
}

// ============================================================================
// FRONT-END HELPERS
// ============================================================================

/// Fixed 64-byte key so session cookies survive across requests in a test.
pub fn session_key() -> Key {
    Key::from(&[7u8; 64][..])
}

/// Every session cookie a response sets, in header order.
pub fn session_cookies<B>(resp: &ServiceResponse<B>) -> Vec<Cookie<'static>> {
    resp.response()
        .cookies()
        .filter(|c| c.name() == COOKIE_NAME)
        .map(|c| c.into_owned())
        .collect()
}

/// The session cookie a browser would keep: the last one set.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    session_cookies(resp).pop()
}

/// Keep `cookie` unless the response replaced it.
pub fn carry<B>(resp: &ServiceResponse<B>, cookie: Cookie<'static>) -> Cookie<'static> {
    session_cookie(resp).unwrap_or(cookie)
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}

/// The hidden CSRF field of the first form on the page.
pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("Invalid CSRF regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("Page has no CSRF token")
}

/// Initialize the front-end against a `Backend`.
macro_rules! test_app {
    ($backend:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(vollmed::auth::session::middleware($crate::common::session_key(), false))
                .app_data(actix_web::web::Data::new(vollmed::api::ApiClient::new(&$backend.url)))
                .configure(vollmed::routes::configure),
        )
        .await
    };
}

/// Log in through the real login form; evaluates to the session cookie.
macro_rules! login_as {
    ($app:expr, $email:expr) => {{
        let resp = actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::get().uri("/login").to_request(),
        )
        .await;
        let cookie = $crate::common::session_cookie(&resp).expect("Login page did not start a session");
        let csrf = $crate::common::csrf_token(&$crate::common::body_string(resp).await);
        let resp = actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::post()
                .uri("/login")
                .cookie(cookie.clone())
                .set_form([("email", $email), ("password", $crate::common::SENHA), ("csrf_token", csrf.as_str())])
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER, "login was not accepted");
        $crate::common::carry(&resp, cookie)
    }};
}

macro_rules! login {
    ($app:expr) => {
        login_as!($app, $crate::common::LOGIN)
    };
}
