pub mod client;
pub mod models;
pub mod response;

pub use client::{GeminiClient, ModelBackend};
pub use models::{
    Candidate, Content, FunctionCall, FunctionDeclaration, FunctionResponse,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part, Tool,
};
pub use response::{extract_text, first_part, parse_response, MalformedResponse};
