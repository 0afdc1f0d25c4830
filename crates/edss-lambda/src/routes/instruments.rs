use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use edss_instruments::scoring::{Domain, ScoreEntry, ValidationError};
use edss_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    domains: Vec<Domain>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        domains: instrument.domains().to_vec(),
    }))
}

/// Report entries outside their documented range. Unknown subscale IDs are
/// rejected outright.
pub async fn validate_scores(
    Path(id): Path<String>,
    Json(scores): Json<Vec<ScoreEntry>>,
) -> Result<Json<Vec<ValidationError>>, ApiError> {
    let instrument = get_instrument(&id)?;
    for entry in &scores {
        instrument.subscale(&entry.subscale_id)?;
    }
    Ok(Json(instrument.validate_scores(&scores)))
}
