mod common;
use common::{temp_file, temp_out};
use rsessionize::config::check::missing_keys_in;
use rsessionize::config::{Config, defaults};
use rsessionize::errors::AppError;
use rsessionize::models::Category;

#[test]
fn test_default_config_mirrors_builtin_tables() {
    let cfg = Config::default();
    assert_eq!(cfg.domain_table.len(), defaults::DOMAIN_TABLE.len());
    assert_eq!(cfg.domain_table[0].domain, "coursera.org");
    assert_eq!(cfg.keyword_rules.len(), 5);
    assert_eq!(cfg.keyword_rules[0].category, Category::EducationCareer);
    assert_eq!(cfg.keyword_rules[4].category, Category::Travel);
    assert_eq!(cfg.window_minutes, 60);
    assert_eq!(cfg.default_user, None);
}

#[test]
fn test_save_and_load_roundtrip() {
    let path = temp_out("config_roundtrip", "conf");
    let mut cfg = Config::default();
    cfg.window_minutes = 30;
    cfg.default_user = Some("alice".into());
    cfg.save_to(&path).expect("save");

    let loaded = Config::load_from(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn test_partial_file_uses_defaults() {
    let path = temp_file(
        "config_partial",
        "conf",
        "window_minutes: 15\nsearch_engines:\n  - ecosia.\n",
    );
    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.window_minutes, 15);
    assert_eq!(cfg.search_engines, ["ecosia."]);
    assert_eq!(cfg.domain_table, Config::default().domain_table);
}

#[test]
fn test_category_labels_in_yaml() {
    let path = temp_file(
        "config_labels",
        "conf",
        "domain_table:\n  - domain: example.com\n    category: Education/Career\n",
    );
    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.domain_table.len(), 1);
    assert_eq!(cfg.domain_table[0].category, Category::EducationCareer);

    let yaml = cfg.to_yaml().expect("yaml");
    assert!(yaml.contains("Education/Career"));
}

#[test]
fn test_unknown_category_is_an_error() {
    let path = temp_file(
        "config_bad_label",
        "conf",
        "domain_table:\n  - domain: example.com\n    category: Gardening\n",
    );
    assert!(matches!(Config::load_from(&path), Err(AppError::Yaml(_))));
}

#[test]
fn test_missing_file_is_a_load_error() {
    let path = temp_out("config_absent", "conf");
    assert!(matches!(Config::load_from(&path), Err(AppError::ConfigLoad)));
}

#[test]
fn test_missing_keys_report() {
    let missing = missing_keys_in("window_minutes: 60\n").expect("check");
    assert!(missing.contains(&"domain_table".to_string()));
    assert!(missing.contains(&"keyword_rules".to_string()));
    assert!(!missing.contains(&"window_minutes".to_string()));

    let full = Config::default().to_yaml().expect("yaml");
    assert!(missing_keys_in(&full).expect("check").is_empty());

    assert!(missing_keys_in("- a\n- b\n").is_err());
}
