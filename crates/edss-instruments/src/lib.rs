//! edss-instruments
//!
//! EDSS scoring and instrument definitions. Pure computation, no I/O.
//! The [`edss`] module holds the scoring rules, [`fields`] reads grades out
//! of string-keyed records, and the [`Instrument`] catalogue describes the
//! inputs and their documented ranges.

pub mod edss;
pub mod error;
pub mod fields;
pub mod instruments;
pub mod scoring;

use error::InstrumentError;
use scoring::{Domain, ScoreEntry, Subscale, ValidationError};

/// Trait implemented by each clinical assessment instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "edss").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "EDSS").
    fn name(&self) -> &str;

    /// The domains and subscales this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Look up a subscale by ID across all domains.
    fn subscale(&self, subscale_id: &str) -> Result<&Subscale, InstrumentError> {
        self.domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .find(|s| s.id == subscale_id)
            .ok_or_else(|| InstrumentError::UnknownSubscale {
                instrument_id: self.id().to_string(),
                subscale_id: subscale_id.to_string(),
            })
    }

    /// Check score entries against documented ranges. Entries for unknown
    /// subscales are skipped.
    ///
    /// This only reports; scoring itself accepts out-of-range grades.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        scores
            .iter()
            .filter_map(|entry| {
                let subscale = self.subscale(&entry.subscale_id).ok()?;
                if subscale.range.contains(entry.value) {
                    return None;
                }
                Some(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value: entry.value,
                    expected_range: subscale.range,
                    score_type: subscale.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        subscale.name,
                        entry.value,
                        subscale.range.min,
                        subscale.range.max,
                    ),
                })
            })
            .collect()
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::edss::Edss)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
