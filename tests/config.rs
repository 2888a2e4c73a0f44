use chrono::{Local, TimeZone};
use daykit::config::Config;
use daykit::constants::{DEFAULT_DATETIME_PATTERN, DEFAULT_DAY_PATTERN};
use daykit::date::{DateTools, FixedClock, Language};
use daykit::number::NumberFormatter;
use daykit::sort::MixedSorter;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.date.pattern, DEFAULT_DATETIME_PATTERN);
    assert_eq!(config.date.day_pattern, DEFAULT_DAY_PATTERN);
    assert_eq!(config.date.separator, "-");
    assert_eq!(config.date.language, Language::English);
    assert_eq!(config.number.group_separator, ",");
    assert_eq!(config.number.decimal_places, None);
    assert_eq!(config.sort.cjk_locale, "zh");
    assert_eq!(config.sort.default_locale, "en");
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty pattern should fail
    config.date.pattern = String::new();
    assert!(config.validate().is_err());

    // Reset and test an unknown log level
    config.date.pattern = DEFAULT_DATETIME_PATTERN.to_string();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    // Reset and test a malformed locale
    config.logging.level = "debug".to_string();
    config.sort.cjk_locale = "zh CN".to_string();
    assert!(config.validate().is_err());

    // Reset and test excessive decimal places
    config.sort.cjk_locale = "zh-CN".to_string();
    config.number.decimal_places = Some(50);
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("pattern = \"yyyy/MM/dd HH:mm:ss\""));
    assert!(toml_str.contains("language = \"en\""));
    assert!(toml_str.contains("group_separator = \",\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[date]
language = "zh"

[number]
decimal_places = 2

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.date.language, Language::Chinese);
    assert_eq!(config.number.decimal_places, Some(2));
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.date.pattern, DEFAULT_DATETIME_PATTERN);
    assert_eq!(config.number.group_separator, ",");
    assert_eq!(config.sort.cjk_locale, "zh");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.date.pattern, default_config.date.pattern);
    assert_eq!(config.date.language, default_config.date.language);
    assert_eq!(config.number.group_separator, default_config.number.group_separator);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daykit.toml");
    std::fs::write(&path, "[number]\ngroup_separator = \" \"\n").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.number.group_separator, " ");
    assert_eq!(NumberFormatter::from_config(&config.number).format(1234567), "1 234 567");
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daykit.toml");
    std::fs::write(&path, "[date]\nseparator = \"\"\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load_from_file(dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_generate_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# daykit Configuration File"));

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.date.pattern, DEFAULT_DATETIME_PATTERN);
}

#[test]
fn test_tools_from_config() {
    let mut config = Config::default();
    config.date.language = Language::Chinese;

    let tools = DateTools::from_config(&config.date);
    assert_eq!(tools.language(), Language::Chinese);
    assert_eq!(tools.relative(tools.now()).unwrap(), "刚刚");

    assert!(MixedSorter::from_config(&config.sort).is_ok());
}

#[test]
fn test_tools_use_configured_patterns_and_separator() {
    let config: Config = toml::from_str(
        r#"
[date]
pattern = "dd.MM.yyyy HH:mm"
day_pattern = "yyyy-MM-dd D"
separator = "."
"#,
    )
    .unwrap();

    let tools = DateTools::from_config(&config.date);
    assert_eq!(tools.pattern(), "dd.MM.yyyy HH:mm");
    assert_eq!(tools.format_default("2025-03-05 08:09:07").unwrap(), "05.03.2025 08:09");
    assert_eq!(tools.normalize("2025.03.05").unwrap(), "2025/03/05");

    let fixed = DateTools::with_clock(FixedClock::new(Local.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()))
        .with_config(&config.date);
    assert_eq!(fixed.today_default(), "2025-06-15 星期日");

    let defaults = DateTools::new();
    assert_eq!(defaults.format_default("2025-03-05 08:09:07").unwrap(), "2025/03/05 08:09:07");
    assert_eq!(defaults.normalize("2025-03-05").unwrap(), "2025/03/05");
}
