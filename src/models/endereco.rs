use serde::{Deserialize, Serialize};

use crate::auth::validate::{self, FieldErrors};

/// Address as the backend stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DadosEndereco {
    pub logradouro: String,
    pub bairro: String,
    pub cep: String,
    pub cidade: String,
    pub uf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complemento: Option<String>,
}

/// Address fields as submitted by the médico and paciente forms.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnderecoForm {
    pub logradouro: String,
    pub bairro: String,
    pub cep: String,
    pub cidade: String,
    pub uf: String,
    pub numero: String,
    pub complemento: String,
}

impl EnderecoForm {
    /// Record address errors into `errors`; the DTO is only meaningful when
    /// `errors` stays empty.
    pub fn validate_into(&self, errors: &mut FieldErrors) -> DadosEndereco {
        errors.check("logradouro", validate::validate_required(&self.logradouro, "Logradouro é obrigatório"));
        errors.check("bairro", validate::validate_required(&self.bairro, "Bairro é obrigatório"));
        errors.check("cep", validate::validate_cep(&self.cep));
        errors.check("cidade", validate::validate_required(&self.cidade, "Cidade é obrigatória"));
        errors.check("uf", validate::validate_uf(&self.uf));

        DadosEndereco {
            logradouro: self.logradouro.trim().to_string(),
            bairro: self.bairro.trim().to_string(),
            cep: self.cep.trim().to_string(),
            cidade: self.cidade.trim().to_string(),
            uf: self.uf.trim().to_string(),
            numero: optional(&self.numero),
            complemento: optional(&self.complemento),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
