use serde::{Deserialize, Serialize};

use super::endereco::{DadosEndereco, EnderecoForm};
use super::especialidade::Especialidade;
use crate::auth::validate::{self, FieldErrors};

/// Payload for `POST /medicos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DadosCadastroMedico {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub crm: String,
    pub especialidade: Especialidade,
    pub endereco: DadosEndereco,
}

/// One row of `GET /medicos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DadosListagemMedico {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub crm: String,
    pub especialidade: Especialidade,
}

/// Form data from the new-médico page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MedicoForm {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub crm: String,
    pub especialidade: String,
    #[serde(flatten)]
    pub endereco: EnderecoForm,
    pub csrf_token: String,
}

impl MedicoForm {
    pub fn validate(&self) -> Result<DadosCadastroMedico, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check("nome", validate::validate_required(&self.nome, "Nome é obrigatório"));
        errors.check("email", validate::validate_email(&self.email));
        errors.check("telefone", validate::validate_telefone(&self.telefone));
        errors.check("crm", validate::validate_crm(&self.crm));
        errors.check("especialidade", validate::validate_especialidade(&self.especialidade));
        let endereco = self.endereco.validate_into(&mut errors);

        match Especialidade::parse(&self.especialidade) {
            Some(especialidade) if errors.is_empty() => Ok(DadosCadastroMedico {
                nome: self.nome.trim().to_string(),
                email: self.email.trim().to_string(),
                telefone: self.telefone.trim().to_string(),
                crm: self.crm.trim().to_string(),
                especialidade,
                endereco,
            }),
            _ => Err(errors),
        }
    }
}
