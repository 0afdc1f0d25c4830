use edss_instruments::fields::FieldMapping;
use edss_lambda::config::{Config, MAPPING_VAR, SUFFIX_VAR};

#[test]
fn defaults_when_unset() {
    let config = Config::from_lookup(|_| None).unwrap();
    assert_eq!(config.mapping_name, "english");
    assert_eq!(config.mapping, FieldMapping::english());
    assert_eq!(config.suffix, None);
}

#[test]
fn empty_values_fall_back_to_defaults() {
    let config = Config::from_lookup(|_| Some("  ".to_string())).unwrap();
    assert_eq!(config.mapping, FieldMapping::english());
    assert_eq!(config.suffix, None);
}

#[test]
fn reads_mapping_and_suffix() {
    let config = Config::from_lookup(|name| match name {
        MAPPING_VAR => Some("german".to_string()),
        SUFFIX_VAR => Some("_v3".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.mapping, FieldMapping::german());
    assert_eq!(config.suffix.as_deref(), Some("_v3"));
}

#[test]
fn unknown_mapping_fails() {
    let err = Config::from_lookup(|name| {
        (name == MAPPING_VAR).then(|| "esperanto".to_string())
    })
    .unwrap_err();
    assert!(err.to_string().contains("EDSS_FIELD_MAPPING"));
}
