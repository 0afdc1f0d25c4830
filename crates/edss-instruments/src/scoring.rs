use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The kind of value a subscale or composite carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Clinician-assigned functional system grade (e.g., 0–6).
    Grade,
    /// Walking-ability step on the ambulation scale (0–16).
    Ambulation,
    /// Half-step ordinal severity (0–10 in steps of 0.5).
    Ordinal,
}

/// Documented bounds for a score. Bounds are advisory: scoring never clamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    /// Whole-number range `[min, max]`.
    pub const fn integer(min: i32, max: i32) -> Self {
        Self {
            min: min as f64,
            max: max as f64,
            step: Some(1.0),
        }
    }

    /// Range `[min, max]` in half steps.
    pub const fn half_steps(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: Some(0.5),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        match self.step {
            Some(step) => {
                let remainder = (value - self.min) % step;
                // Floating point tolerance
                remainder < 1e-9 || (step - remainder) < 1e-9
            }
            None => true,
        }
    }
}

/// One input field of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    /// Range of the value as recorded by the clinician.
    pub range: ScoreRange,
    /// Range after compression onto the decision scale, when the raw
    /// scale is wider than the one the scoring rules use.
    pub converted_range: Option<ScoreRange>,
    pub description: Option<String>,
}

/// A group of related subscales, optionally summarised by a composite.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub subscales: Vec<Subscale>,
    pub composite_score_type: Option<ScoreType>,
    pub composite_range: Option<ScoreRange>,
    pub description: Option<String>,
}

/// A score entry provided by the user for validation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub subscale_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub subscale_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}
