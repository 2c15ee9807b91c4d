use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::EmailPayload;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("rejected: {0}")]
    Rejected(String),
}

/// Identifiers the email service needs for every send.
#[derive(Debug, Clone, Default)]
pub struct DeliverySettings {
    pub service_id: String,
    pub template_id_admin: String,
    pub template_id_user: String,
    pub public_key: String,
}

impl DeliverySettings {
    /// Names of the settings left empty.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id_admin", &self.template_id_admin),
            ("template_id_user", &self.template_id_user),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_empty())
        .map(|(k, _)| k)
        .collect()
    }
}

/// A hosted email API that renders `template_id` with `params`.
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &EmailPayload,
        public_key: &str,
    ) -> Result<(), DeliveryError>;
}

#[async_trait]
impl<T: EmailDelivery + ?Sized> EmailDelivery for Arc<T> {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &EmailPayload,
        public_key: &str,
    ) -> Result<(), DeliveryError> {
        (**self)
            .send(service_id, template_id, params, public_key)
            .await
    }
}
