use std::sync::Arc;

use adfoundry_contact::EmailDelivery;
use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::assets::AssetsService;
use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod how_we_work;
mod index;
mod principles;
mod services;
mod why_choose_us;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub delivery: Arc<dyn EmailDelivery>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/services", get(services::page))
        .route("/services/{slug}", get(services::detail))
        .route("/principles", get(principles::page))
        .route("/how-we-work", get(how_we_work::page))
        .route("/why-choose-us", get(why_choose_us::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/contact/form", get(contact::form))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
