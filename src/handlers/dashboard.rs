use actix_session::Session;
use actix_web::HttpResponse;

use crate::errors::{AppError, render};
use crate::templates_structs::{DashboardTemplate, FeatureCard, PageContext};

fn features() -> Vec<FeatureCard> {
    vec![
        FeatureCard {
            title: "Gerenciar Médicos",
            description: "Cadastre, visualize e edite os médicos da sua clínica.",
            link: "/medicos",
            action: "Ver Médicos",
        },
        FeatureCard {
            title: "Gerenciar Pacientes",
            description: "Cadastre, visualize e edite os pacientes da sua clínica.",
            link: "/pacientes",
            action: "Ver Pacientes",
        },
        FeatureCard {
            title: "Agendar Consulta",
            description: "Agende uma nova consulta para um paciente com um médico disponível.",
            link: "/consultas/nova",
            action: "Agendar Agora",
        },
    ]
}

pub async fn index(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/");
    render(DashboardTemplate { ctx, features: features() })
}
