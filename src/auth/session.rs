use actix_session::config::PersistentSession;
use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::{Cookie, Key, time::Duration};
use serde::{Deserialize, Serialize};

use crate::api::TokenSource;
use crate::errors::AppError;

/// Name of the session cookie that carries the bearer token.
pub const COOKIE_NAME: &str = "vollmed-token";
pub const SESSION_TTL_DAYS: i64 = 7;
const TOKEN_KEY: &str = "token";
const FLASH_KEY: &str = "flash";

/// Session cookie: site-wide, http-only, one-week lifetime, `Secure` only
/// when serving over HTTPS in production.
pub fn middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(COOKIE_NAME.to_string())
        .cookie_path("/".to_string())
        .cookie_secure(secure)
        .cookie_http_only(true)
        .session_lifecycle(PersistentSession::default().session_ttl(Duration::days(SESSION_TTL_DAYS)))
        .build()
}

/// Expired cookie that makes the browser drop the session.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(COOKIE_NAME, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

pub fn get_token(session: &Session) -> Option<String> {
    session.get::<String>(TOKEN_KEY).unwrap_or(None)
}

/// Start a fresh session holding `token`.
pub fn store_token(session: &Session, token: &str) -> Result<(), AppError> {
    session.renew();
    session
        .insert(TOKEN_KEY, token)
        .map_err(|e| AppError::Session(format!("Failed to store token: {e}")))
}

impl TokenSource for Session {
    fn token(&self) -> Option<String> {
        get_token(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashKind {
    Success,
    Error,
}

/// One-shot notification shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub title: String,
    pub message: String,
}

impl Flash {
    pub fn success(message: &str) -> Self {
        Self { kind: FlashKind::Success, title: "Sucesso!".to_string(), message: message.to_string() }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self { kind: FlashKind::Error, title: title.to_string(), message: message.to_string() }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "toast-success",
            FlashKind::Error => "toast-error",
        }
    }
}

pub fn set_flash(session: &Session, flash: &Flash) {
    if let Err(e) = session.insert(FLASH_KEY, flash) {
        log::warn!("Failed to store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<Flash> {
    let flash = session.get::<Flash>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
