// Settings file loading tests
// Author: kelexine (https://github.com/kelexine)

use mockito::{Matcher, Server};
use std::fs;
use std::path::PathBuf;
use systran8_provider::config::ServerSettings;
use systran8_provider::error::ProviderError;
use systran8_provider::{Systran8Provider, TranslationProvider};
use tempfile::TempDir;

fn write_settings(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("settings.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_host_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(
        &dir,
        r#"{"Url":"http://localhost:8904/","Key":"abc","TimeoutSeconds":30}"#,
    );

    let settings = ServerSettings::load(&path).unwrap();
    assert_eq!(settings.url, "http://localhost:8904/");
    assert_eq!(settings.key.expose(), "abc");
    assert_eq!(settings.timeout_seconds, 30);
    assert_eq!(settings.connect_timeout_seconds, 10);
}

#[test]
fn test_missing_file_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = ServerSettings::load(&path).unwrap_err();
    assert!(matches!(err, ProviderError::Config(_)));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_empty_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    for content in [r#"{"Url":"http://localhost/","Key":""}"#, r#"{"Url":"http://localhost/"}"#] {
        let path = write_settings(&dir, content);
        let err = ServerSettings::load(&path).unwrap_err();
        assert!(matches!(err, ProviderError::Config(ref m) if m.contains("No key")));
    }
}

#[test]
fn test_malformed_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, r#"{"Url": "http://localhost/", "Key": "#);

    let err = ServerSettings::load(&path).unwrap_err();
    assert!(matches!(err, ProviderError::ConfigParsing(_)));
}

#[test]
fn test_provider_from_config_file() {
    let mut server = Server::new();
    server
        .mock("GET", "/translation/supportedLanguages")
        .match_query(Matcher::UrlEncoded("key".into(), "file-key".into()))
        .with_status(200)
        .with_body(r#"{"languagePairs":[{"source":"en","target":"fr"}]}"#)
        .create();

    let dir = TempDir::new().unwrap();
    let path = write_settings(
        &dir,
        &format!(r#"{{"Url":"{}/","Key":"file-key"}}"#, server.url()),
    );

    let provider = Systran8Provider::from_config_file(&path).unwrap();
    assert!(provider.is_supported("en-US", "fr-FR").unwrap());
}

#[test]
fn test_provider_from_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let err = Systran8Provider::from_config_file(dir.path().join("nope.json"))
        .err()
        .expect("construction should fail");
    assert!(matches!(err, ProviderError::Config(_)));
}
