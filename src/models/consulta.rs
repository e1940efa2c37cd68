use chrono::{DateTime, Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::especialidade::Especialidade;
use super::medico::DadosListagemMedico;
use crate::auth::validate::FieldErrors;

pub const MEDICO_OBRIGATORIO: &str = "Selecione um médico se uma especialidade for escolhida.";

/// Payload for `POST /consultas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DadosAgendamentoConsulta {
    pub id_paciente: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_medico: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub especialidade: Option<Especialidade>,
    /// ISO-8601 instant in UTC, e.g. `2030-05-01T13:30:00.000Z`.
    pub data: String,
}

/// Form data from the scheduling page. `data` is the calendar date
/// (`YYYY-MM-DD`) and `hora` the time of day (`HH:MM`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConsultaForm {
    pub id_paciente: String,
    pub especialidade: String,
    pub id_medico: String,
    pub data: String,
    pub hora: String,
    pub csrf_token: String,
}

impl ConsultaForm {
    pub fn especialidade(&self) -> Option<Especialidade> {
        Especialidade::parse(&self.especialidade)
    }

    /// Validate against `now`; dates in the past cannot be scheduled.
    pub fn validate(&self, now: DateTime<Local>) -> Result<DadosAgendamentoConsulta, FieldErrors> {
        let mut errors = FieldErrors::default();

        let id_paciente = match self.id_paciente.trim() {
            "" => {
                errors.add("id_paciente", "Paciente é obrigatório");
                None
            }
            raw => raw.parse::<i64>().ok().or_else(|| {
                errors.add("id_paciente", "Paciente inválido");
                None
            }),
        };

        let especialidade = match self.especialidade.trim() {
            "" => None,
            raw => Especialidade::parse(raw).or_else(|| {
                errors.add("especialidade", "Especialidade inválida");
                None
            }),
        };

        let id_medico = match self.id_medico.trim() {
            "" => None,
            raw => raw.parse::<i64>().ok().or_else(|| {
                errors.add("id_medico", "Médico inválido");
                None
            }),
        };

        if especialidade.is_some() && self.id_medico.trim().is_empty() {
            errors.add("id_medico", MEDICO_OBRIGATORIO);
        }

        let data = match combine_date_time(&self.data, &self.hora) {
            Ok(at) if at < now || at.date_naive() < earliest_date() => {
                errors.add("data", "A data deve ser futura");
                None
            }
            Ok(at) => Some(at),
            Err(message) => {
                errors.add("data", message);
                None
            }
        };

        match (id_paciente, data) {
            (Some(id_paciente), Some(data)) if errors.is_empty() => Ok(DadosAgendamentoConsulta {
                id_paciente,
                id_medico,
                especialidade,
                data: to_timestamp(data),
            }),
            _ => Err(errors),
        }
    }
}

/// Doctors offered for a given specialty; all of them when none is chosen.
pub fn filter_medicos(
    medicos: &[DadosListagemMedico],
    especialidade: Option<Especialidade>,
) -> Vec<DadosListagemMedico> {
    match especialidade {
        Some(esp) => medicos.iter().filter(|m| m.especialidade == esp).cloned().collect(),
        None => medicos.to_vec(),
    }
}

/// Combine a calendar date and an optional `HH:MM` time in local time.
/// An empty time means midnight.
pub fn combine_date_time(date: &str, time: &str) -> Result<DateTime<Local>, &'static str> {
    let date = date.trim();
    if date.is_empty() {
        return Err("Data e hora são obrigatórios");
    }
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| "Data inválida")?;
    let time = match time.trim() {
        "" => NaiveTime::MIN,
        raw => NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| "Horário inválido")?,
    };
    Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or("Horário inválido")
}

pub fn to_timestamp(at: DateTime<Local>) -> String {
    at.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}
