use axum::response::IntoResponse;

use crate::content::{PRINCIPLES, Principle};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "principles.html")]
pub struct PrinciplesTemplate {
    pub principles: &'static [Principle],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(PrinciplesTemplate {
        principles: &PRINCIPLES,
    })
}
