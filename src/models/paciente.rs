use serde::{Deserialize, Serialize};

use super::endereco::{DadosEndereco, EnderecoForm};
use crate::auth::validate::{self, FieldErrors};

/// Payload for `POST /pacientes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DadosCadastroPaciente {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cpf: String,
    pub endereco: DadosEndereco,
}

/// One row of `GET /pacientes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DadosListagemPaciente {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub cpf: String,
}

/// Form data from the new-paciente page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PacienteForm {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cpf: String,
    #[serde(flatten)]
    pub endereco: EnderecoForm,
    pub csrf_token: String,
}

impl PacienteForm {
    pub fn validate(&self) -> Result<DadosCadastroPaciente, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check("nome", validate::validate_required(&self.nome, "Nome é obrigatório"));
        errors.check("email", validate::validate_email(&self.email));
        errors.check("telefone", validate::validate_telefone(&self.telefone));
        errors.check("cpf", validate::validate_cpf(&self.cpf));
        let endereco = self.endereco.validate_into(&mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(DadosCadastroPaciente {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            telefone: self.telefone.trim().to_string(),
            cpf: self.cpf.trim().to_string(),
            endereco,
        })
    }
}
