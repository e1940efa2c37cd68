use askama::Template;

use crate::models::especialidade::Especialidade;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
    pub email: String,
}

/// One `<option>` of a select box.
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl Into<String>, current: &str) -> Self {
        let value = value.to_string();
        let selected = value == current.trim();
        Self { value, label: label.into(), selected }
    }

    pub fn especialidades(current: &str) -> Vec<Self> {
        Especialidade::ALL
            .iter()
            .map(|e| Self::new(e.code(), e.label(), current))
            .collect()
    }
}
