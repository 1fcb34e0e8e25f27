use geowrr_domain::{DomainError, RegionZones, ZoneEntry, ZoneMap};

fn sample_zones() -> ZoneMap {
    ZoneMap::new("as")
        .with_country(
            "US",
            ZoneEntry::Nested(RegionZones::new("ny").with_region("CA", "sv")),
        )
        .with_country("HR", ZoneEntry::Leaf("eu".to_string()))
}

#[test]
fn test_zone_for_leaf_country() {
    assert_eq!(sample_zones().zone_for(Some("HR"), None), "eu");
    assert_eq!(sample_zones().zone_for(Some("HR"), Some("21")), "eu");
}

#[test]
fn test_zone_for_nested_region() {
    let zones = sample_zones();

    assert_eq!(zones.zone_for(Some("US"), Some("CA")), "sv");
    assert_eq!(zones.zone_for(Some("US"), Some("NY")), "ny");
    assert_eq!(zones.zone_for(Some("US"), None), "ny");
}

#[test]
fn test_zone_for_unknown_country_uses_default() {
    let zones = sample_zones();

    assert_eq!(zones.zone_for(Some("FR"), None), "as");
    assert_eq!(zones.zone_for(None, Some("CA")), "as");
    assert_eq!(zones.default_zone(), "as");
}

#[test]
fn test_deserialize_from_yaml() {
    let yaml = r#"
default: as
US:
  default: ny
  CA: sv
HR: eu
NO: eu
"#;
    let zones: ZoneMap = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(zones, sample_zones().with_country("NO", ZoneEntry::Leaf("eu".to_string())));
    assert_eq!(zones.len(), 3);
}

#[test]
fn test_deserialize_rejects_missing_root_default() {
    let result: Result<ZoneMap, _> = serde_yaml::from_str("HR: eu\n");

    let err = result.unwrap_err().to_string();
    assert!(err.contains("missing root 'default'"), "{}", err);
}

#[test]
fn test_deserialize_rejects_nested_root_default() {
    let yaml = "default:\n  default: eu\n";
    let result: Result<ZoneMap, _> = serde_yaml::from_str(yaml);

    assert!(result.is_err());
}

#[test]
fn test_deserialize_rejects_nested_without_default() {
    let yaml = "default: as\nUS:\n  CA: sv\n";
    let result: Result<ZoneMap, _> = serde_yaml::from_str(yaml);

    let err = result.unwrap_err().to_string();
    assert!(err.contains("country 'US' has no 'default' zone"), "{}", err);
}

#[test]
fn test_deserialize_rejects_second_level_nesting() {
    let yaml = "default: as\nUS:\n  default: ny\n  CA:\n    default: sv\n";
    let result: Result<ZoneMap, _> = serde_yaml::from_str(yaml);

    assert!(result.is_err());
}

#[test]
fn test_error_type_is_invalid_zone_map() {
    let err = DomainError::InvalidZoneMap("missing root 'default' zone".to_string());
    assert_eq!(err.to_string(), "Invalid zone map: missing root 'default' zone");
}
