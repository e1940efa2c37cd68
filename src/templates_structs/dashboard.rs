use askama::Template;

use super::PageContext;

pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub action: &'static str,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub features: Vec<FeatureCard>,
}
