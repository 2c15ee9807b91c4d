use axum::response::IntoResponse;

use crate::content::{WORKFLOW, WorkflowStep};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "how-we-work.html")]
pub struct HowWeWorkTemplate {
    pub steps: &'static [WorkflowStep],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(HowWeWorkTemplate { steps: &WORKFLOW })
}
