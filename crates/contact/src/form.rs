use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::Service;

/// Field state of the contact form.
///
/// Text fields are checked with `validator` on submit; the browser gates them too,
/// but the server cannot rely on that.
#[derive(Validate, Default, Clone, Debug, PartialEq, Eq)]
pub struct SubmissionForm {
    #[validate(length(min = 1, max = 100, message = "Please enter your name."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(max = 100, message = "Company name is too long."))]
    pub company: String,
    #[validate(length(min = 1, max = 5000, message = "Please tell us about your project."))]
    pub message: String,
    services: Vec<Service>,
}

/// Template parameters sent with both emails.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EmailPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl SubmissionForm {
    /// Selected services, in the order they were checked.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn is_selected(&self, service: &Service) -> bool {
        self.services.contains(service)
    }

    pub fn toggle_service(&mut self, service: Service, checked: bool) {
        if checked {
            if !self.services.contains(&service) {
                self.services.push(service);
            }
        } else {
            self.services.retain(|s| *s != service);
        }
    }

    pub fn service_list(&self) -> String {
        self.services
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn payload(&self) -> EmailPayload {
        EmailPayload {
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            company: self.company.to_owned(),
            service: self.service_list(),
            message: self.message.to_owned(),
        }
    }

    /// First failing field message, checked in form order.
    pub fn validation_message(&self) -> Option<String> {
        let errors = self.validate().err()?;

        Some(first_message(&errors))
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();

    ["name", "email", "company", "message"]
        .iter()
        .filter_map(|field| fields.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    fn filled() -> SubmissionForm {
        SubmissionForm {
            name: "Jane".to_owned(),
            email: "jane@x.com".to_owned(),
            company: String::new(),
            message: "Hi".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_keeps_selection_order_without_duplicates() {
        let mut form = filled();
        form.toggle_service(Service::Branding, true);
        form.toggle_service(Service::DigitalMarketing, true);
        form.toggle_service(Service::Branding, true);

        assert_eq!(
            form.services(),
            &[Service::Branding, Service::DigitalMarketing]
        );

        form.toggle_service(Service::Branding, false);
        assert_eq!(form.services(), &[Service::DigitalMarketing]);

        form.toggle_service(Service::ContentCreation, false);
        assert_eq!(form.services(), &[Service::DigitalMarketing]);
    }

    #[test]
    fn test_every_subset_joins_in_selection_order() {
        let options = Service::VARIANTS;

        for mask in 1u32..(1 << options.len()) {
            let mut form = filled();
            // check in reverse so selection order differs from declaration order
            let selected = options
                .iter()
                .enumerate()
                .rev()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, s)| *s)
                .collect::<Vec<_>>();

            for service in &selected {
                form.toggle_service(*service, true);
            }

            let expected = selected
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ");

            assert_eq!(form.payload().service, expected, "mask {mask:#b}");
        }
    }

    #[test]
    fn test_payload_single_service() {
        let mut form = filled();
        form.toggle_service(Service::SeoAnalytics, true);

        let payload = form.payload();
        assert_eq!(payload.service, "SEO & Analytics");
        assert_eq!(payload.name, "Jane");
        assert_eq!(payload.company, "");
    }

    #[test]
    fn test_validation_message_follows_form_order() {
        assert_eq!(filled().validation_message(), None);

        let form = SubmissionForm {
            name: String::new(),
            email: "not-an-email".to_owned(),
            ..filled()
        };
        assert_eq!(
            form.validation_message().as_deref(),
            Some("Please enter your name.")
        );

        let form = SubmissionForm {
            email: "not-an-email".to_owned(),
            ..filled()
        };
        assert_eq!(
            form.validation_message().as_deref(),
            Some("Please enter a valid email address.")
        );
    }
}
