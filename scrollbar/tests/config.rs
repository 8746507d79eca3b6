//! Tests for scroll bar options.

use std::time::Duration;

use scrollbar::{ConfigError, Orientation, RepeatConfig, ScrollBar, ScrollBarOptions};

#[test]
fn test_default_options() {
    let options = ScrollBarOptions::default();
    assert_eq!(options.orientation, Orientation::Vertical);
    assert_eq!(options.value, 0.0);
    assert_eq!(options.max_value, 100.0);
    assert_eq!(options.page_size, 10.0);
    assert_eq!(options.repeat.initial_delay(), Duration::from_millis(350));
    assert_eq!(options.repeat.interval(), Duration::from_millis(20));
}

#[test]
fn test_builder() {
    let options = ScrollBarOptions::new()
        .orientation(Orientation::Horizontal)
        .value(4.0)
        .max_value(40.0)
        .page_size(8.0);

    let bar = ScrollBar::new(options);
    assert_eq!(bar.orientation(), Orientation::Horizontal);
    assert_eq!(bar.value(), 4.0);
    assert_eq!(bar.max_value(), 40.0);
    assert_eq!(bar.page_size(), 8.0);
}

#[test]
fn test_from_toml_partial() {
    let options = ScrollBarOptions::from_toml_str(
        r#"
        orientation = "horizontal"
        max_value = 250.0
        "#,
    )
    .unwrap();

    assert_eq!(options.orientation, Orientation::Horizontal);
    assert_eq!(options.max_value, 250.0);
    assert_eq!(options.value, 0.0);
    assert_eq!(options.page_size, 10.0);
    assert_eq!(options.repeat, RepeatConfig::default());
}

#[test]
fn test_from_toml_repeat_table() {
    let options = ScrollBarOptions::from_toml_str(
        r#"
        [repeat]
        interval_ms = 40
        "#,
    )
    .unwrap();

    assert_eq!(options.repeat.initial_delay_ms, 350);
    assert_eq!(options.repeat.interval(), Duration::from_millis(40));
}

#[test]
fn test_from_toml_out_of_range_is_clamped_by_widget() {
    let options = ScrollBarOptions::from_toml_str("value = 900.0\npage_size = -3.0").unwrap();
    let bar = ScrollBar::new(options);
    assert_eq!(bar.value(), 100.0);
    assert_eq!(bar.page_size(), 0.0);
}

#[test]
fn test_from_toml_invalid() {
    let err = ScrollBarOptions::from_toml_str("orientation = \"diagonal\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("Invalid scroll bar config"));
}

#[test]
fn test_load_missing_file() {
    let err = ScrollBarOptions::load("/nonexistent/scrollbar.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/scrollbar.toml"));
}
