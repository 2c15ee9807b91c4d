use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

use crate::config::SiteConfig;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub(crate) mod filters {
    use crate::config::SiteConfig;

    /// Contact details from configuration, e.g. `{{ "contact_email"|site }}`.
    #[askama::filter_fn]
    pub fn site(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let site = askama::get_value::<SiteConfig>(values, "site")?;

        let value = match value {
            "contact_email" => site.contact_email.to_owned(),
            "instagram" => format!("@{}", site.instagram),
            "instagram_url" => site.instagram_url(),
            "phone" => site.phone.to_owned(),
            "phone_url" => site.phone_url(),
            "whatsapp_url" => site.whatsapp_url(),
            other => {
                return Err(askama::Error::Custom(
                    format!("unknown site value {other}").into(),
                ));
            }
        };

        Ok(value)
    }

    /// `active` when the link points at the current page or one of its children.
    #[askama::filter_fn]
    pub fn active(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let current_path = askama::get_value::<String>(values, "current_path")?;

        let is_active = current_path == value
            || (value != "/" && current_path.starts_with(&format!("{value}/")));

        Ok(if is_active { "active" } else { "" }.to_owned())
    }
}

pub struct Template {
    pub current_path: String,
    site: SiteConfig,
    /// Set by twinspark on partial requests.
    pub is_fragment: bool,
}

impl Template {
    pub fn new(current_path: impl Into<String>, site: SiteConfig) -> Self {
        Self {
            current_path: current_path.into(),
            site,
            is_fragment: false,
        }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("current_path", Box::new(self.current_path.to_owned()));
        values.insert("site", Box::new(self.site.clone()));

        template.render_with_values(&values)
    }

    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match self.render_with_values(template) {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(path = %self.current_path, err = %err, "failed to render template");

                match self.render_with_values(ServerTemplate) {
                    Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
                    Err(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
                    }
                }
            }
        }
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        let mut response = self.render(template);
        if response.status().is_success() {
            *response.status_mut() = status;
        }
        response
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let is_fragment = parts
            .headers
            .get("ts-request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        Ok(Template {
            current_path: parts.uri.path().to_owned(),
            site: state.config.site.clone(),
            is_fragment,
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

#[cfg(test)]
mod tests {
    use askama::Template as _;

    use super::*;

    #[derive(askama::Template)]
    #[template(
        source = r#"<a class="{{ "/services"|active }}">{{ "contact_email"|site }}</a>"#,
        ext = "html"
    )]
    struct LinkTemplate;

    #[derive(askama::Template)]
    #[template(source = r#"{{ "fax"|site }}"#, ext = "html")]
    struct BrokenTemplate;

    #[test]
    fn test_filters_read_values() {
        let template = Template::new("/services/branding", SiteConfig::default());

        assert_eq!(
            template.to_string(LinkTemplate),
            r#"<a class="active">theadfoundryinfo@gmail.com</a>"#
        );
    }

    #[test]
    fn test_active_ignores_other_pages() {
        let template = Template::new("/contact", SiteConfig::default());
        let html = template.to_string(LinkTemplate);

        assert!(html.starts_with(r#"<a class="">"#));
    }

    #[test]
    fn test_render_without_values_fails() {
        assert!(LinkTemplate.render().is_err());
    }

    #[tokio::test]
    async fn test_render_failure_shows_error_page() {
        use axum::body::to_bytes;

        let template = Template::new("/", SiteConfig::default());
        let response = template.render(BrokenTemplate);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Something Went Wrong"));
    }
}
