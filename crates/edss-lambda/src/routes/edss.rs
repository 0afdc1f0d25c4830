use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use edss_instruments::edss::{EdssInput, EdssScore};
use edss_instruments::fields::{self, FieldMapping};

use crate::error::ApiError;
use crate::state::AppState;

/// `score` is `null` when the record lacks a required field.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: Option<EdssScore>,
}

/// Either the name of a built-in mapping or a full custom one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MappingSelector {
    Builtin(String),
    Custom(FieldMapping),
}

#[derive(Debug, Deserialize)]
pub struct RecordRequest {
    pub record: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub mapping: Option<MappingSelector>,
    #[serde(default)]
    pub suffix: Option<String>,
}

pub async fn score_input(Json(input): Json<EdssInput>) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        score: Some(input.score()),
    })
}

pub async fn score_record(
    State(state): State<AppState>,
    Json(req): Json<RecordRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let mapping = match req.mapping {
        Some(MappingSelector::Builtin(name)) => FieldMapping::builtin(&name)?,
        Some(MappingSelector::Custom(mapping)) => mapping,
        None => state.config.mapping.clone(),
    };
    let suffix = req.suffix.as_deref().or(state.config.suffix.as_deref());

    let score = fields::score_record(&req.record, &mapping, suffix)?;
    Ok(Json(ScoreResponse { score }))
}
