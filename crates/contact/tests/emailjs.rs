use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use adfoundry_contact::{
    ContactForm, DeliveryError, EmailDelivery, EmailJsClient, Service, SubmissionStatus,
};
use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::{Value, json};

mod support;

type Received = Arc<Mutex<Vec<Value>>>;

async fn send(State(received): State<Received>, Json(body): Json<Value>) -> (StatusCode, String) {
    let rejected = body["template_id"] == "template_broken";
    received.lock().unwrap().push(body);

    if rejected {
        return (StatusCode::BAD_REQUEST, "The template ID is invalid".to_owned());
    }

    (StatusCode::OK, "OK".to_owned())
}

async fn spawn_emailjs() -> anyhow::Result<(String, Received)> {
    let received = Received::default();
    let app = Router::new()
        .route("/api/v1.0/email/send", post(send))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    Ok((format!("http://{addr}"), received))
}

#[tokio::test]
async fn test_client_posts_emailjs_body() -> anyhow::Result<()> {
    let (base_url, received) = spawn_emailjs().await?;
    let client = EmailJsClient::new(&base_url, Duration::from_secs(5))?;
    let params = support::jane(&[Service::SeoAnalytics, Service::Branding]).payload();

    client
        .send("service_foundry", "template_admin", &params, "pk_test")
        .await?;

    let received = received.lock().unwrap().clone();
    assert_eq!(
        received,
        vec![json!({
            "service_id": "service_foundry",
            "template_id": "template_admin",
            "user_id": "pk_test",
            "template_params": {
                "name": "Jane",
                "email": "jane@x.com",
                "company": "",
                "service": "SEO & Analytics, Branding",
                "message": "Hi",
            },
        })]
    );

    Ok(())
}

#[tokio::test]
async fn test_client_maps_rejection_to_status_error() -> anyhow::Result<()> {
    let (base_url, _) = spawn_emailjs().await?;
    let client = EmailJsClient::new(&base_url, Duration::from_secs(5))?;
    let params = support::jane(&[Service::Branding]).payload();

    let err = client
        .send("service_foundry", "template_broken", &params, "pk_test")
        .await
        .unwrap_err();

    match err {
        DeliveryError::Status { status, body } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, "The template ID is invalid");
        }
        other => panic!("unexpected error: {other}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_client_unreachable_is_http_error() -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = EmailJsClient::new(format!("http://{addr}"), Duration::from_secs(2))?;
    let params = support::jane(&[Service::Branding]).payload();

    let err = client
        .send("service_foundry", "template_admin", &params, "pk_test")
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::Http(_)));

    Ok(())
}

#[tokio::test]
async fn test_workflow_over_http() -> anyhow::Result<()> {
    let (base_url, received) = spawn_emailjs().await?;
    let client = EmailJsClient::new(&base_url, Duration::from_secs(5))?;
    let mut form = ContactForm::new(client, support::settings())
        .with_form(support::jane(&[Service::ContentCreation]));

    form.submit().await?;

    assert_eq!(form.status(), SubmissionStatus::Submitted);

    let templates = received
        .lock()
        .unwrap()
        .iter()
        .map(|body| body["template_id"].as_str().unwrap_or_default().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(templates, vec!["template_admin", "template_user"]);

    Ok(())
}
