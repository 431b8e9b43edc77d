use serde_json::json;
use whub_domain::config::{ApiConfig, CatalogConfig, ExclusivityMode, ServerConfig};
use whub_domain::constants::DEFAULT_PORT;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, DEFAULT_PORT);
    assert!(server.ssl.is_none());

    let catalog = CatalogConfig::default();
    assert_eq!(catalog.exclusivity, ExclusivityMode::Standalone);
    assert!(catalog.audit_registry);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "catalog": { "exclusivity": "mutual", "audit_registry": false }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.catalog.exclusivity, ExclusivityMode::Mutual);
    assert!(!cfg.catalog.audit_registry);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("empty config deserialize");
    assert_eq!(cfg.server.port, DEFAULT_PORT);
    assert_eq!(cfg.catalog.exclusivity, ExclusivityMode::Standalone);
}

#[test]
fn unknown_exclusivity_mode_is_rejected() {
    let raw = json!({ "catalog": { "exclusivity": "pairwise" } });
    assert!(serde_json::from_value::<ApiConfig>(raw).is_err());
}

#[test]
fn deserialized_exclusivity_matches_from_str() {
    for raw in ["Mutual", "MUTUAL", " mutual "] {
        let cfg: ApiConfig = serde_json::from_value(json!({ "catalog": { "exclusivity": raw } }))
            .expect("mode deserializes");
        assert_eq!(cfg.catalog.exclusivity, raw.parse().expect("mode parses"));
    }

    let err = serde_json::from_value::<ApiConfig>(json!({ "catalog": { "exclusivity": "solo" } }))
        .expect_err("unknown mode");
    assert!(err.to_string().contains("unknown exclusivity mode 'solo'"));
}

#[test]
fn exclusivity_mode_parses_case_insensitively() {
    assert_eq!("Mutual".parse::<ExclusivityMode>(), Ok(ExclusivityMode::Mutual));
    assert_eq!(" standalone ".parse::<ExclusivityMode>(), Ok(ExclusivityMode::Standalone));

    let err = "solo".parse::<ExclusivityMode>().expect_err("unknown mode");
    assert!(err.to_string().contains("solo"));
}

#[test]
fn mutating_a_clone_leaves_the_original_untouched() {
    let original = ApiConfig::default();
    let mut copy = original.clone();
    copy.catalog.exclusivity = ExclusivityMode::Mutual;

    assert_eq!(original.catalog.exclusivity, ExclusivityMode::Standalone);
    assert_eq!(copy.catalog.exclusivity, ExclusivityMode::Mutual);
}
