use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use edss_lambda::config::Config;
use edss_lambda::state::AppState;

async fn call(app: axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn app() -> axum::Router {
    edss_lambda::app(AppState::default())
}

fn reference_record() -> Value {
    json!({
        "visual": 1,
        "brainstem": 2,
        "pyramidal": 1,
        "cerebellar": 3,
        "sensory": 1,
        "bowel_bladder": 4,
        "cerebral": 2,
        "ambulation": 1
    })
}

#[tokio::test]
async fn health() {
    let (status, body) = call(app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_edss() {
    let (status, body) = call(app(), "GET", "/instruments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": "edss", "name": "EDSS" }]));
}

#[tokio::test]
async fn instrument_detail() {
    let (status, body) = call(app(), "GET", "/instruments/edss", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domains"][0]["id"], "functional_systems");
    assert_eq!(body["domains"][0]["subscales"][0]["converted_range"]["max"], 4.0);
}

#[tokio::test]
async fn unknown_instrument_is_404() {
    let (status, body) = call(app(), "GET", "/instruments/wais_iv", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "unknown instrument: wais_iv");
}

#[tokio::test]
async fn validate_reports_out_of_range() {
    let scores = json!([
        { "subscale_id": "visual", "value": 6.0 },
        { "subscale_id": "ambulation", "value": 17.0 }
    ]);
    let (status, body) = call(app(), "POST", "/instruments/edss/validate", Some(scores)).await;
    assert_eq!(status, StatusCode::OK);
    let errors = body.as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["subscale_id"], "ambulation");
    assert_eq!(errors[0]["score_type"], "ambulation");
}

#[tokio::test]
async fn validate_rejects_unknown_subscale() {
    let scores = json!([{ "subscale_id": "gait", "value": 1.0 }]);
    let (status, _) = call(app(), "POST", "/instruments/edss/validate", Some(scores)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn scores_raw_grades() {
    let (status, body) = call(app(), "POST", "/edss/score", Some(reference_record())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "score": "4" }));
}

#[tokio::test]
async fn scores_ambulation_override() {
    let mut grades = reference_record();
    grades["ambulation"] = json!(9);
    let (_, body) = call(app(), "POST", "/edss/score", Some(grades)).await;
    assert_eq!(body["score"], "6.5");
}

#[tokio::test]
async fn scores_record_with_default_mapping() {
    let request = json!({ "record": reference_record() });
    let (status, body) = call(app(), "POST", "/edss/score/record", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "score": "4" }));
}

#[tokio::test]
async fn incomplete_record_scores_null() {
    let mut record = reference_record();
    record["cerebral"] = json!("");
    let request = json!({ "record": record });
    let (status, body) = call(app(), "POST", "/edss/score/record", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "score": null }));
}

#[tokio::test]
async fn record_with_named_mapping_and_suffix() {
    let request = json!({
        "record": {
            "sehfunktion_2": "0", "hirnstamm_2": "0", "pyramidal_2": "1",
            "kleinhirn_2": "1", "sensorik_2": "0", "blase_mastdarm_2": "0",
            "zerebral_2": "0", "gehfaehigkeit_2": "0"
        },
        "mapping": "german",
        "suffix": "_2"
    });
    let (_, body) = call(app(), "POST", "/edss/score/record", Some(request)).await;
    assert_eq!(body["score"], "1.5");
}

#[tokio::test]
async fn record_with_custom_mapping() {
    let request = json!({
        "record": { "V": 0, "B": 0, "P": 0, "C": 0, "S": 0, "BB": 0, "M": 0, "A": 16 },
        "mapping": {
            "visual": "V", "brainstem": "B", "pyramidal": "P", "cerebellar": "C",
            "sensory": "S", "bowel_bladder": "BB", "cerebral": "M", "ambulation": "A"
        }
    });
    let (_, body) = call(app(), "POST", "/edss/score/record", Some(request)).await;
    assert_eq!(body["score"], "10");
}

#[tokio::test]
async fn unknown_mapping_is_400() {
    let request = json!({ "record": reference_record(), "mapping": "french" });
    let (status, body) = call(app(), "POST", "/edss/score/record", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown field mapping: french");
}

#[tokio::test]
async fn record_with_float_grades_is_scored() {
    let mut record = reference_record();
    record["bowel_bladder"] = json!(4.0);
    record["cerebellar"] = json!("3.0");
    let request = json!({ "record": record });
    let (status, body) = call(app(), "POST", "/edss/score/record", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "score": "4" }));
}

#[tokio::test]
async fn non_integer_field_is_400() {
    let mut record = reference_record();
    record["sensory"] = json!("mild");
    let request = json!({ "record": record });
    let (status, _) = call(app(), "POST", "/edss/score/record", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn configured_defaults_apply_when_request_is_silent() {
    let config = Config::from_lookup(|name| match name {
        "EDSS_FIELD_MAPPING" => Some("de".to_string()),
        "EDSS_FIELD_SUFFIX" => Some("_bl".to_string()),
        _ => None,
    })
    .unwrap();
    let app = edss_lambda::app(AppState::new(config));
    let request = json!({
        "record": {
            "sehfunktion_bl": 0, "hirnstamm_bl": 0, "pyramidal_bl": 0,
            "kleinhirn_bl": 0, "sensorik_bl": 0, "blase_mastdarm_bl": 0,
            "zerebral_bl": 0, "gehfaehigkeit_bl": 0
        }
    });
    let (_, body) = call(app, "POST", "/edss/score/record", Some(request)).await;
    assert_eq!(body["score"], "0");
}
