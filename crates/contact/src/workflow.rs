use std::time::Duration;

use tokio::{sync::watch, time::Instant};

use crate::{
    DeliveryError, DeliverySettings, EmailDelivery, EmailPayload, Error, Result, Service,
    SubmissionForm, SubmissionStatus,
};

/// How long the thank-you state lasts before the form clears itself.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

pub const NO_SERVICE_SELECTED: &str = "Please select at least one service.";
pub const DELIVERY_FAILED: &str = "Failed to send message. Please try again later.";

/// One contact form and its submit cycle.
///
/// The admin notification is sent first and the visitor's confirmation only after it
/// succeeded. After a successful submit the form holds a reset deadline instead of a
/// background timer, so dropping the form drops the pending reset with it.
pub struct ContactForm<D> {
    delivery: D,
    settings: DeliverySettings,
    form: SubmissionForm,
    status: watch::Sender<SubmissionStatus>,
    error: Option<String>,
    reset_at: Option<Instant>,
}

impl<D: EmailDelivery> ContactForm<D> {
    pub fn new(delivery: D, settings: DeliverySettings) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);

        Self {
            delivery,
            settings,
            form: SubmissionForm::default(),
            status,
            error: None,
            reset_at: None,
        }
    }

    pub fn with_form(mut self, form: SubmissionForm) -> Self {
        self.form = form;
        self
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
    }

    pub fn set_company(&mut self, value: impl Into<String>) {
        self.form.company = value.into();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.form.message = value.into();
    }

    pub fn toggle_service(&mut self, service: Service, checked: bool) {
        self.form.toggle_service(service, checked);
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    /// Observe every status transition, `Submitting` included.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.status.borrow().accepts_submit()
    }

    pub fn reset_at(&self) -> Option<Instant> {
        self.reset_at
    }

    pub async fn submit(&mut self) -> Result<()> {
        self.reset_if_due();

        if !self.can_submit() {
            return Err(Error::Busy);
        }

        if self.form.services().is_empty() {
            return Err(self.reject(NO_SERVICE_SELECTED.to_owned()));
        }

        if let Some(message) = self.form.validation_message() {
            return Err(self.reject(message));
        }

        self.error = None;
        self.set_status(SubmissionStatus::Submitting);

        let payload = self.form.payload();

        if let Err(err) = self.deliver(&payload).await {
            tracing::error!(error = %err, email = %payload.email, "failed to deliver contact form");

            self.error = Some(DELIVERY_FAILED.to_owned());
            self.set_status(SubmissionStatus::Failed(DELIVERY_FAILED.to_owned()));

            return Err(err.into());
        }

        tracing::info!(
            email = %payload.email,
            services = %payload.service,
            "contact form delivered"
        );

        self.reset_at = Some(Instant::now() + RESET_DELAY);
        self.set_status(SubmissionStatus::Submitted);

        Ok(())
    }

    /// Clears the form if the post-submit deadline has passed.
    pub fn reset_if_due(&mut self) -> bool {
        match self.reset_at {
            Some(at) if Instant::now() >= at => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Waits for the post-submit deadline, then clears the form.
    pub async fn settle(&mut self) {
        let Some(at) = self.reset_at else {
            return;
        };

        tokio::time::sleep_until(at).await;
        self.reset();
    }

    async fn deliver(&self, payload: &EmailPayload) -> std::result::Result<(), DeliveryError> {
        let DeliverySettings {
            service_id,
            template_id_admin,
            template_id_user,
            public_key,
        } = &self.settings;

        self.delivery
            .send(service_id, template_id_admin, payload, public_key)
            .await?;

        self.delivery
            .send(service_id, template_id_user, payload, public_key)
            .await
    }

    /// Validation failures never change the status, so `Failed` stays `Failed`.
    fn reject(&mut self, message: String) -> Error {
        self.error = Some(message.to_owned());

        Error::Validation(message)
    }

    fn reset(&mut self) {
        self.form = SubmissionForm::default();
        self.error = None;
        self.reset_at = None;
        self.set_status(SubmissionStatus::Idle);
    }

    fn set_status(&self, status: SubmissionStatus) {
        self.status.send_replace(status);
    }
}
