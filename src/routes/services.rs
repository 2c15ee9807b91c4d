use axum::{extract::Path, http::StatusCode, response::IntoResponse};

use crate::content::{SERVICES, ServiceDetail, service_by_slug};
use crate::template::{NotFoundTemplate, Template, filters};

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub services: &'static [ServiceDetail],
}

#[derive(askama::Template)]
#[template(path = "service.html")]
pub struct ServiceTemplate {
    pub detail: &'static ServiceDetail,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ServicesTemplate {
        services: &SERVICES,
    })
}

pub async fn detail(template: Template, Path(slug): Path<String>) -> impl IntoResponse {
    let Some(detail) = service_by_slug(&slug) else {
        return template.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate);
    };

    template.render(ServiceTemplate { detail })
}
