//! Reading EDSS grades out of string-keyed records.
//!
//! A [`FieldMapping`] names the record key for each of the eight grades. An
//! optional suffix is appended to every key, which is how longitudinal
//! exports tell visits apart (`ambulation_v2`, `ambulation_m12`, ...).

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::edss::{EdssInput, EdssScore};
use crate::error::InstrumentError;

/// A record that can be asked for a field by key.
pub trait FieldSource {
    /// The field's text, or `None` if the key is absent.
    fn field(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_str()))
    }
}

/// JSON strings are taken as-is and numbers by their text (`4.0` reads as
/// `"4.0"`, which still parses as grade 4). `null` reads as blank.
/// Booleans, arrays and objects come through as JSON text and fail to
/// parse as grades.
impl FieldSource for serde_json::Map<String, Value> {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| match v {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Null => Cow::Borrowed(""),
            Value::Number(n) => Cow::Owned(n.to_string()),
            other => Cow::Owned(other.to_string()),
        })
    }
}

/// The eight grades a record must supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Visual,
    Brainstem,
    Pyramidal,
    Cerebellar,
    Sensory,
    BowelBladder,
    Cerebral,
    Ambulation,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Visual,
        Role::Brainstem,
        Role::Pyramidal,
        Role::Cerebellar,
        Role::Sensory,
        Role::BowelBladder,
        Role::Cerebral,
        Role::Ambulation,
    ];
}

/// Record key names for each grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldMapping {
    pub visual: String,
    pub brainstem: String,
    pub pyramidal: String,
    pub cerebellar: String,
    pub sensory: String,
    pub bowel_bladder: String,
    pub cerebral: String,
    pub ambulation: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::english()
    }
}

impl FieldMapping {
    /// Names of the built-in mappings accepted by [`FieldMapping::builtin`].
    pub const BUILTIN_NAMES: [&'static str; 2] = ["english", "german"];

    pub fn english() -> Self {
        Self::from_names([
            "visual",
            "brainstem",
            "pyramidal",
            "cerebellar",
            "sensory",
            "bowel_bladder",
            "cerebral",
            "ambulation",
        ])
    }

    /// Field names used by German-language registries.
    pub fn german() -> Self {
        Self::from_names([
            "sehfunktion",
            "hirnstamm",
            "pyramidal",
            "kleinhirn",
            "sensorik",
            "blase_mastdarm",
            "zerebral",
            "gehfaehigkeit",
        ])
    }

    /// Look up a built-in mapping. `default` is an alias for `english` and
    /// `de` for `german`.
    pub fn builtin(name: &str) -> Result<Self, InstrumentError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "english" | "default" => Ok(Self::english()),
            "german" | "de" => Ok(Self::german()),
            _ => Err(InstrumentError::UnknownMapping(name.to_string())),
        }
    }

    fn from_names<S: Into<String>>(names: [S; 8]) -> Self {
        let [visual, brainstem, pyramidal, cerebellar, sensory, bowel_bladder, cerebral, ambulation] =
            names.map(Into::into);
        Self {
            visual,
            brainstem,
            pyramidal,
            cerebellar,
            sensory,
            bowel_bladder,
            cerebral,
            ambulation,
        }
    }

    pub fn name_for(&self, role: Role) -> &str {
        match role {
            Role::Visual => &self.visual,
            Role::Brainstem => &self.brainstem,
            Role::Pyramidal => &self.pyramidal,
            Role::Cerebellar => &self.cerebellar,
            Role::Sensory => &self.sensory,
            Role::BowelBladder => &self.bowel_bladder,
            Role::Cerebral => &self.cerebral,
            Role::Ambulation => &self.ambulation,
        }
    }

    /// Record key for `role`: the mapped name with `suffix` appended.
    pub fn key(&self, role: Role, suffix: Option<&str>) -> String {
        let name = self.name_for(role);
        match suffix {
            Some(suffix) => format!("{name}{suffix}"),
            None => name.to_string(),
        }
    }

    /// This mapping with `suffix` baked into every name.
    pub fn suffixed(&self, suffix: &str) -> Self {
        Self::from_names(Role::ALL.map(|role| self.key(role, Some(suffix))))
    }
}

/// Parse a grade, accepting whole numbers written as decimals (`"3.0"`),
/// as spreadsheet exports store them.
fn parse_grade(text: &str) -> Option<i32> {
    let text = text.trim();
    if let Ok(grade) = text.parse::<i32>() {
        return Some(grade);
    }
    let value: f64 = text.parse().ok()?;
    let whole = value.is_finite()
        && value.fract() == 0.0
        && value >= f64::from(i32::MIN)
        && value <= f64::from(i32::MAX);
    whole.then_some(value as i32)
}

/// Pull the eight grades out of `record`.
///
/// Returns `Ok(None)` when any key is missing or blank; nothing is parsed
/// in that case. A present value that is not a whole number is an error.
pub fn extract_input<R: FieldSource + ?Sized>(
    record: &R,
    mapping: &FieldMapping,
    suffix: Option<&str>,
) -> Result<Option<EdssInput>, InstrumentError> {
    let mut raw = Vec::with_capacity(Role::ALL.len());
    for role in Role::ALL {
        let key = mapping.key(role, suffix);
        match record.field(&key) {
            Some(value) if !value.trim().is_empty() => raw.push((key, value)),
            _ => {
                tracing::debug!(key = %key, "record incomplete, no EDSS score");
                return Ok(None);
            }
        }
    }

    let mut grades = [0i32; 8];
    for (grade, (key, value)) in grades.iter_mut().zip(raw) {
        *grade = parse_grade(&value).ok_or_else(|| {
            tracing::debug!(key = %key, value = %value, "field is not a whole number");
            InstrumentError::InvalidField {
                key: key.clone(),
                value: value.to_string(),
            }
        })?;
    }

    let [visual, brainstem, pyramidal, cerebellar, sensory, bowel_bladder, cerebral, ambulation] =
        grades;
    Ok(Some(EdssInput {
        visual,
        brainstem,
        pyramidal,
        cerebellar,
        sensory,
        bowel_bladder,
        cerebral,
        ambulation,
    }))
}

/// Score a record. `Ok(None)` means the record is not yet scoreable, which
/// is different from a score of 0.
pub fn score_record<R: FieldSource + ?Sized>(
    record: &R,
    mapping: &FieldMapping,
    suffix: Option<&str>,
) -> Result<Option<EdssScore>, InstrumentError> {
    Ok(extract_input(record, mapping, suffix)?.map(|input| input.score()))
}
