use gemini_flights::cli::Args;
use gemini_flights::config::{
    expand_env_var_in_string, init_config_file, normalize_endpoint, parse_flag, Config,
    Credentials, FileConfig, DEFAULT_MODEL, DEFAULT_REFERENCE_YEAR, DEFAULT_TEMPERATURE,
};
use gemini_flights::error::FlightsError;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

fn resolve(args: &Args, file: &FileConfig, pairs: &[(&str, &str)]) -> Result<Config, FlightsError> {
    Config::resolve(args, file, env_of(pairs))
}

#[test]
fn test_missing_credentials_is_config_error() {
    let result = resolve(&Args::default(), &FileConfig::default(), &[]);
    assert!(matches!(result, Err(FlightsError::ConfigError(_))));

    let blank = resolve(
        &Args::default(),
        &FileConfig::default(),
        &[("GEMINI_API_KEY", "  ")],
    );
    assert!(matches!(blank, Err(FlightsError::ConfigError(_))));
}

#[test]
fn test_access_token_selects_vertex_endpoint() {
    let config = resolve(
        &Args::default(),
        &FileConfig::default(),
        &[("GOOGLE_ACCESS_TOKEN", "ya29.token"), ("GEMINI_API_KEY", "key")],
    )
    .unwrap();

    assert_eq!(config.credentials, Credentials::AccessToken("ya29.token".to_string()));
    assert_eq!(
        config.api_endpoint,
        "https://us-central1-aiplatform.googleapis.com/v1/projects/gemini-flights-415718/locations/us-central1/publishers/google/models/gemini-pro:generateContent"
    );
    assert_eq!(config.model, DEFAULT_MODEL);
    assert!((config.temperature - DEFAULT_TEMPERATURE).abs() < f32::EPSILON);
    assert_eq!(config.reference_year, DEFAULT_REFERENCE_YEAR);
    assert!(!config.verbose);
    assert!(config.clear_screen);
}

#[test]
fn test_api_key_selects_generative_language_endpoint() {
    let args = Args {
        model: Some("gemini-1.5-flash".to_string()),
        ..Default::default()
    };
    let config = resolve(&args, &FileConfig::default(), &[("GEMINI_API_KEY", "abc123")]).unwrap();

    assert_eq!(config.credentials, Credentials::ApiKey("abc123".to_string()));
    assert_eq!(
        config.api_endpoint,
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
    );
}

#[test]
fn test_credentials_debug_hides_secret() {
    let debug = format!("{:?}", Credentials::ApiKey("super-secret".to_string()));
    assert!(!debug.contains("super-secret"));
}

#[test]
fn test_layer_precedence() {
    let file: FileConfig = serde_yaml::from_str(
        r#"
api:
  project: file-project
  location: europe-west4
model:
  name: file-model
  temperature: 0.9
session:
  reference_year: 2030
  verbose: true
"#,
    )
    .unwrap();
    let env = [
        ("GOOGLE_ACCESS_TOKEN", "token"),
        ("GEMINI_FLIGHTS_PROJECT", "env-project"),
        ("GEMINI_FLIGHTS_TEMPERATURE", "0.7"),
    ];
    let args = Args {
        temperature: Some(0.1),
        year: Some(2026),
        ..Default::default()
    };

    let config = resolve(&args, &file, &env).unwrap();

    assert_eq!(config.project, "env-project");
    assert_eq!(config.location, "europe-west4");
    assert_eq!(config.model, "file-model");
    assert!((config.temperature - 0.1).abs() < f32::EPSILON);
    assert_eq!(config.reference_year, 2026);
    assert!(config.verbose);
    assert!(config.api_endpoint.contains("/projects/env-project/locations/europe-west4/"));
    assert!(config.api_endpoint.ends_with("/models/file-model:generateContent"));
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig =
        serde_yaml::from_str("model:\n  temperature: 0.9\nsession:\n  verbose: true\n").unwrap();
    let env = [
        ("GEMINI_API_KEY", "key"),
        ("GEMINI_FLIGHTS_TEMPERATURE", "0.2"),
        ("GEMINI_FLIGHTS_VERBOSE", "no"),
        ("GEMINI_FLIGHTS_YEAR", "2025"),
    ];

    let config = resolve(&Args::default(), &file, &env).unwrap();

    assert!((config.temperature - 0.2).abs() < f32::EPSILON);
    assert!(!config.verbose);
    assert_eq!(config.reference_year, 2025);
}

#[test]
fn test_invalid_temperature() {
    let env = [("GEMINI_API_KEY", "key")];

    let args = Args {
        temperature: Some(3.5),
        ..Default::default()
    };
    assert!(matches!(
        resolve(&args, &FileConfig::default(), &env),
        Err(FlightsError::ConfigError(_))
    ));

    let env = [("GEMINI_API_KEY", "key"), ("GEMINI_FLIGHTS_TEMPERATURE", "warm")];
    assert!(matches!(
        resolve(&Args::default(), &FileConfig::default(), &env),
        Err(FlightsError::ConfigError(_))
    ));
}

#[test]
fn test_custom_endpoint_is_normalized() {
    let args = Args {
        api_endpoint: Some("http://localhost:8080/v1beta/".to_string()),
        ..Default::default()
    };
    let config = resolve(&args, &FileConfig::default(), &[("GEMINI_API_KEY", "key")]).unwrap();

    assert_eq!(
        config.api_endpoint,
        "http://localhost:8080/v1beta/models/gemini-pro:generateContent"
    );
}

#[test]
fn test_normalize_endpoint() {
    let full = "https://example.com/v1/models/gemini-pro:generateContent";
    assert_eq!(normalize_endpoint(full, "other"), full);
    assert_eq!(
        normalize_endpoint("https://example.com/v1/models", "gemini-pro"),
        "https://example.com/v1/models/gemini-pro:generateContent"
    );
    assert_eq!(
        normalize_endpoint("https://example.com/v1", "gemini-pro"),
        "https://example.com/v1/models/gemini-pro:generateContent"
    );
}

#[test]
fn test_no_clear_flag_and_file_setting() {
    let env = [("GEMINI_API_KEY", "key")];

    let args = Args {
        no_clear: true,
        ..Default::default()
    };
    assert!(!resolve(&args, &FileConfig::default(), &env).unwrap().clear_screen);

    let file: FileConfig = serde_yaml::from_str("session:\n  clear_screen: false\n").unwrap();
    assert!(!resolve(&Args::default(), &file, &env).unwrap().clear_screen);
}

#[test]
fn test_load_yaml_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "api:\n  project: my-project\nmodel:\n  name: gemini-1.0-pro\n  temperature: 0.3\n",
    )
    .unwrap();

    let config = FileConfig::load_from(&path).unwrap();

    assert_eq!(config.api.project.as_deref(), Some("my-project"));
    assert_eq!(config.model.name.as_deref(), Some("gemini-1.0-pro"));
    assert_eq!(config.model.temperature, Some(0.3));
    assert!(config.session.clear_screen);
}

#[test]
fn test_load_json_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".gemini-flights.json");
    fs::write(
        &path,
        r#"{ "api": { "location": "asia-northeast1" }, "session": { "reference_year": 2027 } }"#,
    )
    .unwrap();

    let config = FileConfig::load_from(&path).unwrap();

    assert_eq!(config.api.location.as_deref(), Some("asia-northeast1"));
    assert_eq!(config.session.reference_year, Some(2027));
}

#[test]
fn test_load_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "model: [unclosed").unwrap();

    assert!(FileConfig::load_from(&path).is_err());
    assert!(FileConfig::load_from(&dir.path().join("missing.yaml")).is_err());
}

#[test]
fn test_first_existing_config_file_wins() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join(".gemini-flights.yaml");
    let json = dir.path().join(".gemini-flights.json");
    let yaml = dir.path().join("config.yaml");
    fs::write(&json, r#"{ "model": { "name": "from-json" } }"#).unwrap();
    fs::write(&yaml, "model:\n  name: from-yaml\n").unwrap();

    let config = FileConfig::load_first(&[missing.clone(), json, yaml]).unwrap();
    assert_eq!(config.model.name.as_deref(), Some("from-json"));

    let defaults = FileConfig::load_first(&[missing]).unwrap();
    assert!(defaults.model.name.is_none());
}

#[test]
fn test_malformed_config_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".gemini-flights.yaml");
    fs::write(&path, "model: [unclosed").unwrap();

    match FileConfig::load_first(&[path]) {
        Err(FlightsError::ConfigError(message)) => {
            assert!(message.contains("Failed to parse YAML config file"))
        }
        other => panic!("expected a config error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_config_values_expand_env_vars() {
    std::env::set_var("GEMINI_FLIGHTS_TEST_PROJECT", "expanded-project");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(&path, "api:\n  project: \"${GEMINI_FLIGHTS_TEST_PROJECT}\"\n").unwrap();

    let config = FileConfig::load_from(&path).unwrap();
    assert_eq!(config.api.project.as_deref(), Some("expanded-project"));

    assert_eq!(
        expand_env_var_in_string("${GEMINI_FLIGHTS_TEST_UNSET_VARIABLE}/x"),
        "${GEMINI_FLIGHTS_TEST_UNSET_VARIABLE}/x"
    );
}

#[test]
fn test_parse_flag() {
    assert_eq!(parse_flag("TRUE"), Some(true));
    assert_eq!(parse_flag(" 1 "), Some(true));
    assert_eq!(parse_flag("no"), Some(false));
    assert_eq!(parse_flag("maybe"), None);
}

#[test]
fn test_init_config_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("gemini-flights");

    let path = init_config_file(Some(&target)).unwrap();
    assert_eq!(path, target.join("config.yaml"));

    let written = FileConfig::load_from(&path).unwrap();
    assert_eq!(written.model.name.as_deref(), Some(DEFAULT_MODEL));
    assert_eq!(written.session.reference_year, Some(DEFAULT_REFERENCE_YEAR));

    assert!(matches!(
        init_config_file(Some(&target)),
        Err(FlightsError::ConfigError(_))
    ));
}

#[test]
fn test_config_paths_prefer_project_files() {
    let paths = FileConfig::get_config_paths();
    assert_eq!(paths[0].to_str(), Some(".gemini-flights.yaml"));
    assert!(paths.len() >= 3);
}
