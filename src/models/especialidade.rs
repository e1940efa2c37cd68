use serde::{Deserialize, Serialize};
use std::fmt;

/// Medical specialty, serialized as the backend's upper-case codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Especialidade {
    Ortopedia,
    Cardiologia,
    Ginecologia,
    Dermatologia,
}

impl Especialidade {
    pub const ALL: [Especialidade; 4] = [
        Especialidade::Ortopedia,
        Especialidade::Cardiologia,
        Especialidade::Ginecologia,
        Especialidade::Dermatologia,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Especialidade::Ortopedia => "ORTOPEDIA",
            Especialidade::Cardiologia => "CARDIOLOGIA",
            Especialidade::Ginecologia => "GINECOLOGIA",
            Especialidade::Dermatologia => "DERMATOLOGIA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Especialidade::Ortopedia => "Ortopedia",
            Especialidade::Cardiologia => "Cardiologia",
            Especialidade::Ginecologia => "Ginecologia",
            Especialidade::Dermatologia => "Dermatologia",
        }
    }

    /// Parse a backend code. Surrounding whitespace is ignored, case is not.
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|e| e.code() == code)
    }
}

impl fmt::Display for Especialidade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
