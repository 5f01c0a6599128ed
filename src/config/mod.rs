mod api;
mod defaults;
mod validation;

use crate::cli::Args;
use crate::error::{FlightsError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::{
    generative_language_endpoint, normalize_endpoint, vertex_endpoint, ApiConfig, Credentials,
};
pub use defaults::{
    DEFAULT_LOCATION, DEFAULT_MODEL, DEFAULT_PROJECT, DEFAULT_REFERENCE_YEAR, DEFAULT_TEMPERATURE,
};
pub use validation::{expand_env_var_in_string, parse_flag};

pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_ACCESS_TOKEN";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
    #[serde(default)]
    pub reference_year: Option<i32>,
    #[serde(
        default = "defaults::default_clear_screen",
        skip_serializing_if = "defaults::is_default_clear_screen"
    )]
    pub clear_screen: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            verbose: None,
            reference_year: None,
            clear_screen: defaults::default_clear_screen(),
        }
    }
}

/// Contents of `.gemini-flights.yaml` (or `.yml`/`.json`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub project: String,
    pub location: String,
    pub model: String,
    pub api_endpoint: String,
    pub credentials: Credentials,
    pub temperature: f32,
    pub reference_year: i32,
    pub verbose: bool,
    pub clear_screen: bool,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let file_config = FileConfig::load()?;

        Self::resolve(args, &file_config, |key| env::var(key).ok())
    }

    /// Merge the layers: CLI args > env vars > config file > defaults.
    pub fn resolve<E>(args: &Args, file: &FileConfig, env: E) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let credentials = if let Some(token) = env(ACCESS_TOKEN_ENV) {
            Credentials::AccessToken(token)
        } else if let Some(key) = env(API_KEY_ENV) {
            Credentials::ApiKey(key)
        } else {
            return Err(FlightsError::ConfigError(format!(
                "set {} (Vertex AI) or {} (Gemini API)",
                ACCESS_TOKEN_ENV, API_KEY_ENV
            )));
        };

        let project = args
            .project
            .clone()
            .or_else(|| env("GEMINI_FLIGHTS_PROJECT"))
            .or(file.api.project.clone())
            .unwrap_or_else(|| DEFAULT_PROJECT.to_string());

        let location = args
            .location
            .clone()
            .or_else(|| env("GEMINI_FLIGHTS_LOCATION"))
            .or(file.api.location.clone())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        let model = args
            .model
            .clone()
            .or_else(|| env("GEMINI_FLIGHTS_MODEL"))
            .or(file.model.name.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_endpoint = match args
            .api_endpoint
            .clone()
            .or_else(|| env("GEMINI_FLIGHTS_ENDPOINT"))
            .or(file.api.endpoint.clone())
        {
            Some(endpoint) => normalize_endpoint(&endpoint, &model),
            None => match credentials {
                Credentials::AccessToken(_) => vertex_endpoint(&project, &location, &model),
                Credentials::ApiKey(_) => generative_language_endpoint(&model),
            },
        };

        let temperature = match args.temperature {
            Some(t) => t,
            None => match env("GEMINI_FLIGHTS_TEMPERATURE") {
                Some(raw) => raw.trim().parse::<f32>().map_err(|_| {
                    FlightsError::ConfigError(format!("invalid temperature '{}'", raw))
                })?,
                None => file.model.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            },
        };
        if !(0.0..=2.0).contains(&temperature) {
            return Err(FlightsError::ConfigError(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                temperature
            )));
        }

        let reference_year = match args.year {
            Some(year) => year,
            None => match env("GEMINI_FLIGHTS_YEAR") {
                Some(raw) => raw
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| FlightsError::ConfigError(format!("invalid year '{}'", raw)))?,
                None => file.session.reference_year.unwrap_or(DEFAULT_REFERENCE_YEAR),
            },
        };

        let verbose = args.verbose
            || env("GEMINI_FLIGHTS_VERBOSE")
                .and_then(|v| parse_flag(&v))
                .or(file.session.verbose)
                .unwrap_or(false);

        let clear_screen = !args.no_clear && file.session.clear_screen;

        Ok(Config {
            project,
            location,
            model,
            api_endpoint,
            credentials,
            temperature,
            reference_year,
            verbose,
            clear_screen,
        })
    }
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        Self::load_first(&Self::get_config_paths())
    }

    /// Load the first of `paths` that exists. Defaults when none do; an
    /// unreadable or malformed file is an error.
    pub fn load_first(paths: &[PathBuf]) -> Result<Self> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Ok(Self::load_from(path)?),
            None => Ok(FileConfig::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str());
        let config: FileConfig = if extension == Some("json") {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?
        } else {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
        };

        Ok(config.expanded())
    }

    fn expanded(mut self) -> Self {
        let expand = |value: &mut Option<String>| {
            if let Some(v) = value.as_mut() {
                *v = expand_env_var_in_string(v);
            }
        };
        expand(&mut self.api.endpoint);
        expand(&mut self.api.project);
        expand(&mut self.api.location);
        expand(&mut self.model.name);
        self
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".gemini-flights.yaml"),
            PathBuf::from(".gemini-flights.yml"),
            PathBuf::from(".gemini-flights.json"),
        ];

        if let Some(config_dir) = user_config_dir() {
            paths.push(config_dir.join("config.yaml"));
            paths.push(config_dir.join("config.yml"));
            paths.push(config_dir.join("config.json"));
        }

        paths
    }

    pub fn example() -> Self {
        FileConfig {
            api: ApiConfig {
                endpoint: None,
                project: Some(DEFAULT_PROJECT.to_string()),
                location: Some(DEFAULT_LOCATION.to_string()),
            },
            model: ModelConfig {
                name: Some(DEFAULT_MODEL.to_string()),
                temperature: Some(DEFAULT_TEMPERATURE),
            },
            session: SessionConfig {
                verbose: Some(false),
                reference_year: Some(DEFAULT_REFERENCE_YEAR),
                clear_screen: defaults::default_clear_screen(),
            },
        }
    }
}

fn user_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("gemini-flights"))
}

/// Write an example config to `dir` (the user config directory by default).
/// Refuses to overwrite an existing file.
pub fn init_config_file(dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => user_config_dir().ok_or_else(|| {
            FlightsError::ConfigError("could not determine home directory".to_string())
        })?,
    };
    let path = dir.join("config.yaml");
    if path.exists() {
        return Err(FlightsError::ConfigError(format!(
            "config file already exists: {}",
            path.display()
        )));
    }

    fs::create_dir_all(&dir)?;
    let contents = serde_yaml::to_string(&FileConfig::example())?;
    fs::write(&path, contents)?;
    Ok(path)
}
