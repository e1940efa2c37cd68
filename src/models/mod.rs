pub mod consulta;
pub mod endereco;
pub mod especialidade;
pub mod medico;
pub mod paciente;
pub mod page;
