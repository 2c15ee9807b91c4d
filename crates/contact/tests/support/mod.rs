#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use adfoundry_contact::{
    ContactForm, DeliveryError, DeliverySettings, EmailDelivery, EmailPayload, Service,
    SubmissionForm,
};
use async_trait::async_trait;

#[derive(Clone, Debug)]
pub struct SentEmail {
    pub service_id: String,
    pub template_id: String,
    pub params: EmailPayload,
    pub public_key: String,
}

/// Records every send and fails the ones addressed to `fail_template`.
#[derive(Clone, Default)]
pub struct RecordingDelivery {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    fail_template: Arc<Mutex<Option<String>>>,
}

impl RecordingDelivery {
    pub fn failing_on(template_id: &str) -> Self {
        Self {
            fail_template: Arc::new(Mutex::new(Some(template_id.to_owned()))),
            ..Default::default()
        }
    }

    pub fn recover(&self) {
        self.fail_template.lock().unwrap().take();
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn templates(&self) -> Vec<String> {
        self.sent().into_iter().map(|s| s.template_id).collect()
    }
}

#[async_trait]
impl EmailDelivery for RecordingDelivery {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &EmailPayload,
        public_key: &str,
    ) -> Result<(), DeliveryError> {
        tokio::task::yield_now().await;

        let failing = self.fail_template.lock().unwrap().as_deref() == Some(template_id);
        if failing {
            return Err(DeliveryError::Rejected(format!(
                "template {template_id} is disabled"
            )));
        }

        self.sent.lock().unwrap().push(SentEmail {
            service_id: service_id.to_owned(),
            template_id: template_id.to_owned(),
            params: params.clone(),
            public_key: public_key.to_owned(),
        });

        Ok(())
    }
}

pub fn settings() -> DeliverySettings {
    DeliverySettings {
        service_id: "service_foundry".to_owned(),
        template_id_admin: "template_admin".to_owned(),
        template_id_user: "template_user".to_owned(),
        public_key: "pk_test".to_owned(),
    }
}

pub fn jane(services: &[Service]) -> SubmissionForm {
    let mut form = SubmissionForm::default();
    form.name = "Jane".to_owned();
    form.email = "jane@x.com".to_owned();
    form.message = "Hi".to_owned();

    for service in services {
        form.toggle_service(*service, true);
    }

    form
}

pub fn contact_form(
    delivery: &RecordingDelivery,
    services: &[Service],
) -> ContactForm<RecordingDelivery> {
    ContactForm::new(delivery.clone(), settings()).with_form(jane(services))
}
