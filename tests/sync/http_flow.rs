use serde_json::json;
use tempfeel::config::ServiceConfig;
use tempfeel::engine::{PredictionMode, Sensation, SubmitStatus};
use tempfeel::{FormEdit, FormSession, GarmentCatalog, GarmentId, HttpPredictionService};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn form_against(server: &MockServer) -> FormSession<HttpPredictionService> {
    let service = HttpPredictionService::new(&ServiceConfig {
        base_url: server.uri(),
        ..ServiceConfig::default()
    });
    FormSession::new(
        service,
        GarmentCatalog::standard().clone(),
        tempfeel::ObservationDefaults::default(),
    )
}

#[tokio::test]
async fn unedited_comfort_resubmit_hits_endpoint_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict-feels"))
        .and(body_partial_json(json!({
            "instances": [{"upperClo": 0.08, "lowerClo": 0.15, "temp": 20.0, "hr": 75}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "prediction": "WARM",
            "model_accuracy": 0.74
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = form_against(&server);
    let first = form.submit().await.unwrap();
    assert_eq!(form.state().sensation, Some(Sensation::Warm));

    assert!(!form.is_dirty());
    let second = form.submit().await.unwrap();

    assert_eq!(first.status, SubmitStatus::Submitted);
    assert_eq!(second.status, SubmitStatus::Unchanged);
    assert_eq!(first.outcome, second.outcome);
}

#[tokio::test]
async fn clothing_endpoint_drives_recommendation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict-clothing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": {"upr_clo": 0.72, "lwr_clo": 0.2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = form_against(&server);
    form.set_mode(PredictionMode::Clothing);
    form.submit().await.unwrap();

    assert!(form.state().is_selected(GarmentId::JFleece));
    assert!(form.state().is_selected(GarmentId::PThick));
    assert!(!form.state().is_selected(GarmentId::TPoly));
    assert!(!form.state().is_selected(GarmentId::PThin));
}

#[tokio::test]
async fn server_error_keeps_displayed_prediction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict-feels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"prediction": "COLD"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict-feels"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": "No feels model loaded"
        })))
        .mount(&server)
        .await;

    let mut form = form_against(&server);
    let shown = form.submit().await.unwrap().outcome;

    form.apply(FormEdit::HeartRate(130));
    let err = form.submit().await.unwrap_err();

    assert!(err.to_string().contains("503"));
    assert_eq!(form.displayed_outcome(), Some(&shown));
    assert_eq!(form.state().sensation, Some(Sensation::Cold));
    assert!(form.is_dirty());
}
