/// Field-level validation errors, first message per field wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(Vec<(String, String)>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push((field.to_string(), message.into()));
        }
    }

    /// Record the outcome of one of the `validate_*` functions below.
    pub fn check(&mut self, field: &str, result: Option<String>) {
        if let Some(message) = result {
            self.add(field, message);
        }
    }

    /// Message for `field`, used by templates to render inline errors.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

/// Validate a required text field.
pub fn validate_required(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(message.to_string());
    }
    None
}

/// Validate an email: one '@', non-empty local part, dotted domain, no whitespace.
pub fn validate_email(email: &str) -> Option<String> {
    const INVALID: &str = "Email inválido";
    let trimmed = email.trim();
    if trimmed.len() > 254 || trimmed.chars().any(char::is_whitespace) {
        return Some(INVALID.to_string());
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Some(INVALID.to_string());
    };
    if local.is_empty() || domain.contains('@') {
        return Some(INVALID.to_string());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Some(INVALID.to_string());
    }
    None
}

/// Validate a phone number: at least 10 characters, formatting allowed.
pub fn validate_telefone(telefone: &str) -> Option<String> {
    if telefone.trim().chars().count() < 10 {
        return Some("Telefone inválido".to_string());
    }
    None
}

/// Validate a CRM: 4 to 6 digits.
pub fn validate_crm(crm: &str) -> Option<String> {
    let crm = crm.trim();
    if !(4..=6).contains(&crm.len()) || !all_digits(crm) {
        return Some("CRM deve ter de 4 a 6 dígitos".to_string());
    }
    None
}

/// Validate a CPF: `NNN.NNN.NNN-NN`, with each separator optional.
pub fn validate_cpf(cpf: &str) -> Option<String> {
    if !cpf_shape(cpf.trim()) {
        return Some("CPF inválido".to_string());
    }
    None
}

/// Validate a CEP: exactly 8 digits, no hyphen.
pub fn validate_cep(cep: &str) -> Option<String> {
    let cep = cep.trim();
    if cep.len() != 8 || !all_digits(cep) {
        return Some("CEP deve ter 8 dígitos".to_string());
    }
    None
}

/// Validate a state abbreviation: exactly 2 characters.
pub fn validate_uf(uf: &str) -> Option<String> {
    if uf.trim().chars().count() != 2 {
        return Some("UF deve ter 2 caracteres".to_string());
    }
    None
}

/// Validate a specialty code against the fixed set.
pub fn validate_especialidade(code: &str) -> Option<String> {
    if crate::models::especialidade::Especialidade::parse(code).is_none() {
        return Some("Especialidade inválida".to_string());
    }
    None
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Three groups of three digits, then two, with an optional '.' after the
/// first two groups and an optional '-' before the last.
fn cpf_shape(cpf: &str) -> bool {
    let mut rest = cpf;
    for separator in ['.', '.', '-'] {
        let Some(after) = take_digits(rest, 3) else {
            return false;
        };
        rest = after.strip_prefix(separator).unwrap_or(after);
        if separator == '-' {
            // the '-' group is the last group of three
            return take_digits(rest, 2).is_some_and(str::is_empty);
        }
    }
    false
}

fn take_digits(value: &str, count: usize) -> Option<&str> {
    let head = value.get(..count)?;
    all_digits(head).then(|| &value[count..])
}
