use axum::response::IntoResponse;

use crate::content::{SERVICES, ServiceDetail, TAGLINE};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub tagline: &'static str,
    pub services: &'static [ServiceDetail],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        tagline: TAGLINE,
        services: &SERVICES,
    })
}
