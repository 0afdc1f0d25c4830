//! Expanded Disability Status Scale scoring.
//!
//! Two stages: an ambulation grade of 3 or more maps straight to a score
//! ([`ambulation_override`]); otherwise the seven functional system grades,
//! with visual and bowel/bladder first compressed, are resolved by an
//! ordered rule chain ([`resolve_functional_systems`]).

mod convert;
mod rules;
mod score;
mod stats;

use serde::{Deserialize, Serialize};

pub use convert::{convert_bowel_bladder, convert_visual};
pub use rules::{ambulation_override, resolve_functional_systems};
pub use score::{EdssScore, ParseEdssScoreError};
pub use stats::{max_and_count, second_max_and_count, MaxStat};

/// Raw grades for one examination, as recorded.
///
/// Documented ranges: visual 0–6, brainstem 0–5, pyramidal 0–6,
/// cerebellar 0–5, sensory 0–6, bowel/bladder 0–6, cerebral 0–5,
/// ambulation 0–16. Values outside them are scored as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdssInput {
    pub visual: i32,
    pub brainstem: i32,
    pub pyramidal: i32,
    pub cerebellar: i32,
    pub sensory: i32,
    pub bowel_bladder: i32,
    pub cerebral: i32,
    pub ambulation: i32,
}

impl EdssInput {
    /// The seven functional system grades in canonical order, with visual
    /// and bowel/bladder converted.
    pub fn functional_systems(&self) -> [i32; 7] {
        [
            convert_visual(self.visual),
            self.brainstem,
            self.pyramidal,
            self.cerebellar,
            self.sensory,
            convert_bowel_bladder(self.bowel_bladder),
            self.cerebral,
        ]
    }

    pub fn score(&self) -> EdssScore {
        score(self)
    }
}

pub fn score(input: &EdssInput) -> EdssScore {
    if let Some(score) = ambulation_override(input.ambulation) {
        return score;
    }
    let systems = input.functional_systems();
    let max = max_and_count(&systems);
    resolve_functional_systems(&systems, max, input.ambulation)
}
