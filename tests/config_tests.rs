use oncall_schedules::config::AppConfig;
use tempfile::tempdir;

#[test]
fn test_missing_config_file_is_created_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(path.exists());

    // Second load reads the file that was just written
    let reloaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_existing_config_file_is_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "graphql_url = \"https://oncall.example.com/api/graphql\"\npage_size = 25\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.graphql_url, "https://oncall.example.com/api/graphql");
    assert_eq!(config.page_size, 25);
    assert_eq!(config.auth_token, None);
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "page_size = \"many\"").unwrap();

    assert!(AppConfig::load_from(&path).is_err());
}
