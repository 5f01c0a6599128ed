use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// How requests to the model are authorized. Only ever read from the environment.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// OAuth bearer token for Vertex AI
    AccessToken(String),
    /// Generative Language API key
    ApiKey(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::AccessToken(_) => write!(f, "AccessToken(***)"),
            Credentials::ApiKey(_) => write!(f, "ApiKey(***)"),
        }
    }
}

pub fn vertex_endpoint(project: &str, location: &str, model: &str) -> String {
    format!(
        "https://{location}-aiplatform.googleapis.com/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:generateContent",
        location = location,
        project = project,
        model = model
    )
}

pub fn generative_language_endpoint(model: &str) -> String {
    format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
        model
    )
}

/// Turn a user-supplied endpoint into a full `generateContent` URL.
pub fn normalize_endpoint(endpoint: &str, model: &str) -> String {
    if endpoint.contains(":generateContent") {
        endpoint.to_string()
    } else {
        let base = endpoint.trim_end_matches('/');
        if base.ends_with("/models") {
            format!("{}/{}:generateContent", base, model)
        } else {
            format!("{}/models/{}:generateContent", base, model)
        }
    }
}
