use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown subscale '{subscale_id}' for instrument '{instrument_id}'")]
    UnknownSubscale {
        instrument_id: String,
        subscale_id: String,
    },

    #[error("unknown field mapping: {0}")]
    UnknownMapping(String),

    #[error("field '{key}' is not a whole number: {value:?}")]
    InvalidField { key: String, value: String },
}
