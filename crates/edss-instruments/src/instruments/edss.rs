use crate::scoring::{Domain, ScoreRange, ScoreType, Subscale};
use crate::Instrument;

/// EDSS: Kurtzke Expanded Disability Status Scale.
/// Seven functional system grades plus an ambulation grade. Overall score
/// 0–10 in half steps, computed by [`crate::edss::score`].
pub struct Edss;

impl Instrument for Edss {
    fn id(&self) -> &str {
        "edss"
    }

    fn name(&self) -> &str {
        "EDSS"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![
                Domain {
                    id: "functional_systems".to_string(),
                    name: "Functional Systems".to_string(),
                    subscales: vec![
                        grade("visual", "Visual (Optic)", 6, Some(4)),
                        grade("brainstem", "Brainstem", 5, None),
                        grade("pyramidal", "Pyramidal", 6, None),
                        grade("cerebellar", "Cerebellar", 5, None),
                        grade("sensory", "Sensory", 6, None),
                        grade("bowel_bladder", "Bowel and Bladder", 6, Some(5)),
                        grade("cerebral", "Cerebral (Mental)", 5, None),
                    ],
                    composite_score_type: None,
                    composite_range: None,
                    description: Some(
                        "Visual and bowel/bladder grades are compressed before scoring"
                            .to_string(),
                    ),
                },
                Domain {
                    id: "ambulation".to_string(),
                    name: "Ambulation".to_string(),
                    subscales: vec![Subscale {
                        id: "ambulation".to_string(),
                        name: "Ambulation".to_string(),
                        score_type: ScoreType::Ambulation,
                        range: ScoreRange::integer(0, 16),
                        converted_range: None,
                        description: Some(
                            "0-2: scored from functional systems, 3+: determines EDSS directly"
                                .to_string(),
                        ),
                    }],
                    composite_score_type: None,
                    composite_range: None,
                    description: None,
                },
                Domain {
                    id: "edss".to_string(),
                    name: "EDSS".to_string(),
                    subscales: vec![],
                    composite_score_type: Some(ScoreType::Ordinal),
                    composite_range: Some(ScoreRange::half_steps(0.0, 10.0)),
                    description: Some(
                        "0: normal, 1-4.5: fully ambulatory, 5-9.5: ambulation impaired, 10: death due to MS"
                            .to_string(),
                    ),
                },
            ]
        });
        &DOMAINS
    }
}

fn grade(id: &str, name: &str, max: i32, converted_max: Option<i32>) -> Subscale {
    Subscale {
        id: id.to_string(),
        name: name.to_string(),
        score_type: ScoreType::Grade,
        range: ScoreRange::integer(0, max),
        converted_range: converted_max.map(|max| ScoreRange::integer(0, max)),
        description: None,
    }
}
