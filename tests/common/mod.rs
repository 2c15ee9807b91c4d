#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use adfoundry::AppState;
use adfoundry::config::{Config, EmailJsConfig, ObservabilityConfig, ServerConfig, SiteConfig};
use adfoundry_contact::{DeliveryError, EmailDelivery, EmailPayload};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Captures sends instead of calling EmailJS.
#[derive(Clone, Default)]
pub struct MockDelivery {
    sent: Arc<Mutex<Vec<(String, EmailPayload)>>>,
    fail_template: Option<String>,
}

impl MockDelivery {
    pub fn failing_on(template_id: &str) -> Self {
        Self {
            fail_template: Some(template_id.to_owned()),
            ..Default::default()
        }
    }

    pub fn templates(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|(t, _)| t.clone()).collect()
    }

    pub fn payloads(&self) -> Vec<EmailPayload> {
        self.sent.lock().unwrap().iter().map(|(_, p)| p.clone()).collect()
    }
}

#[async_trait]
impl EmailDelivery for MockDelivery {
    async fn send(
        &self,
        _service_id: &str,
        template_id: &str,
        params: &EmailPayload,
        _public_key: &str,
    ) -> Result<(), DeliveryError> {
        if self.fail_template.as_deref() == Some(template_id) {
            return Err(DeliveryError::Rejected("mock failure".to_owned()));
        }

        self.sent
            .lock()
            .unwrap()
            .push((template_id.to_owned(), params.clone()));

        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        emailjs: EmailJsConfig {
            service_id: "service_foundry".to_owned(),
            template_id_admin: "template_admin".to_owned(),
            template_id_user: "template_user".to_owned(),
            public_key: "pk_test".to_owned(),
            ..Default::default()
        },
        site: SiteConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app(delivery: &MockDelivery) -> Router {
    adfoundry::server::app(AppState {
        config: test_config(),
        delivery: Arc::new(delivery.clone()),
    })
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    read(response).await
}

pub async fn post_form(router: &Router, body: &str, fragment: bool) -> (StatusCode, String) {
    let mut request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    if fragment {
        request = request.header("ts-request", "true");
    }

    let response = router
        .clone()
        .oneshot(request.body(Body::from(body.to_owned())).unwrap())
        .await
        .unwrap();

    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, String) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}
