//! EmailJS REST client.
//!
//! The account must allow API calls from non-browser applications, otherwise
//! EmailJS answers 403 and the submission fails like any other delivery error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::{DeliveryError, EmailDelivery, EmailPayload};

pub const DEFAULT_BASE_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

#[derive(Clone, Debug)]
pub struct EmailJsClient {
    client: Client,
    base_url: String,
}

impl EmailJsClient {
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.as_ref().trim_end_matches('/').to_owned(),
        })
    }

    pub fn send_url(&self) -> String {
        format!("{}{SEND_PATH}", self.base_url)
    }
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

#[async_trait]
impl EmailDelivery for EmailJsClient {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &EmailPayload,
        public_key: &str,
    ) -> Result<(), DeliveryError> {
        let resp = self
            .client
            .post(self.send_url())
            .json(&SendRequest {
                service_id,
                template_id,
                user_id: public_key,
                template_params: params,
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DeliveryError::Status { status, body });
        }

        tracing::debug!(template_id, "email accepted");

        Ok(())
    }
}
