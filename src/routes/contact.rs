use std::str::FromStr;

use adfoundry_contact::{ContactForm, RESET_DELAY, Service, SubmissionForm};
use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::Form;
use serde::Deserialize;
use strum::VariantArray;

use crate::content::NEXT_STEPS;
use crate::routes::AppState;
use crate::template::{Template, filters};

pub const INVALID_SERVICE: &str = "Invalid service selection.";

/// Field values and error message to redraw the form with.
pub struct FormView {
    pub form: SubmissionForm,
    pub error: Option<String>,
    pub options: &'static [Service],
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            form: SubmissionForm::default(),
            error: None,
            options: Service::VARIANTS,
        }
    }
}

impl FormView {
    pub fn is_selected(&self, service: &Service) -> bool {
        self.form.is_selected(service)
    }
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub view: FormView,
    pub submitted: bool,
    pub reset_delay_ms: u128,
    pub next_steps: &'static [&'static str],
}

impl Default for ContactTemplate {
    fn default() -> Self {
        Self {
            view: FormView::default(),
            submitted: false,
            reset_delay_ms: RESET_DELAY.as_millis(),
            next_steps: &NEXT_STEPS,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub view: FormView,
}

#[derive(askama::Template)]
#[template(path = "partials/contact-success.html")]
pub struct ContactSuccessTemplate {
    pub reset_delay_ms: u128,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate::default())
}

/// Empty form, requested when the thank-you panel expires.
pub async fn form(template: Template) -> impl IntoResponse {
    template.render(ContactFormTemplate {
        view: FormView::default(),
    })
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub service: Vec<String>,
    #[serde(default)]
    pub message: String,
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let mut contact = ContactForm::new(
        app_state.delivery.clone(),
        app_state.config.emailjs.delivery(),
    );

    // Browsers strip whitespace from email inputs, other fields are sent as typed.
    contact.set_name(input.name);
    contact.set_email(input.email.trim());
    contact.set_company(input.company);
    contact.set_message(input.message);

    for value in &input.service {
        let Ok(service) = Service::from_str(value) else {
            tracing::debug!(service = %value, "unknown service posted");

            return render_form(&template, contact.form().clone(), INVALID_SERVICE.to_owned());
        };

        contact.toggle_service(service, true);
    }

    if let Err(err) = contact.submit().await {
        let message = contact
            .error()
            .map(str::to_owned)
            .unwrap_or_else(|| err.to_string());

        return render_form(&template, contact.form().clone(), message);
    }

    let reset_delay_ms = RESET_DELAY.as_millis();

    if template.is_fragment {
        return template.render(ContactSuccessTemplate { reset_delay_ms });
    }

    template.render(ContactTemplate {
        submitted: true,
        ..Default::default()
    })
}

fn render_form(template: &Template, form: SubmissionForm, error: String) -> axum::response::Response {
    let view = FormView {
        form,
        error: Some(error),
        ..Default::default()
    };

    if template.is_fragment {
        return template.render(ContactFormTemplate { view });
    }

    template.render(ContactTemplate {
        view,
        ..Default::default()
    })
}
