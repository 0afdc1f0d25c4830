use std::env;

use edss_instruments::fields::FieldMapping;

/// Built-in mapping used when a request does not name one.
pub const MAPPING_VAR: &str = "EDSS_FIELD_MAPPING";
/// Suffix appended to record keys when a request does not give one.
pub const SUFFIX_VAR: &str = "EDSS_FIELD_SUFFIX";

const DEFAULT_MAPPING: &str = "english";

/// Service configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub mapping_name: String,
    pub mapping: FieldMapping,
    pub suffix: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mapping_name: DEFAULT_MAPPING.to_string(),
            mapping: FieldMapping::english(),
            suffix: None,
        }
    }
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unset and empty variables
    /// take their defaults; an unknown mapping name is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mapping_name = non_empty(MAPPING_VAR).unwrap_or_else(|| DEFAULT_MAPPING.to_string());
        let mapping = FieldMapping::builtin(&mapping_name)
            .map_err(|e| eyre::eyre!("{MAPPING_VAR}: {e}"))?;

        Ok(Self {
            mapping_name,
            mapping,
            suffix: non_empty(SUFFIX_VAR),
        })
    }
}
