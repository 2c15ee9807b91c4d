use axum::response::IntoResponse;

use crate::content::{ADVANTAGES, Advantage, TESTIMONIALS, Testimonial};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "why-choose-us.html")]
pub struct WhyChooseUsTemplate {
    pub advantages: &'static [Advantage],
    pub testimonials: &'static [Testimonial],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(WhyChooseUsTemplate {
        advantages: &ADVANTAGES,
        testimonials: &TESTIMONIALS,
    })
}
