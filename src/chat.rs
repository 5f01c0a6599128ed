use crate::api::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ModelBackend,
    Part, Tool,
};
use crate::error::Result;
use crate::models::Role;
use crate::ui::trace;

/// One long-lived conversation with the model.
///
/// Every request carries the full history plus the tools and generation
/// config fixed at construction.
pub struct ChatSession<B> {
    backend: B,
    tools: Vec<Tool>,
    generation_config: Option<GenerationConfig>,
    history: Vec<Content>,
    verbose: bool,
}

impl<B: ModelBackend> ChatSession<B> {
    pub fn new(backend: B, tools: Vec<Tool>, generation_config: Option<GenerationConfig>) -> Self {
        Self {
            backend,
            tools,
            generation_config,
            history: Vec::new(),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }

    pub fn replace_history(&mut self, history: Vec<Content>) {
        self.history = history;
    }

    pub async fn send_text(&mut self, text: &str) -> Result<Option<GenerateContentResponse>> {
        self.send_message(vec![Part::text(text)]).await
    }

    /// Send user parts and return the raw response.
    ///
    /// The exchange is only added to the history when the model returned a
    /// candidate with content.
    pub async fn send_message(
        &mut self,
        parts: Vec<Part>,
    ) -> Result<Option<GenerateContentResponse>> {
        let outgoing = Content::new(Role::User, parts);

        let mut contents = self.history.clone();
        contents.push(outgoing.clone());

        let request = GenerateContentRequest {
            contents,
            tools: self.tools.clone(),
            generation_config: self.generation_config.clone(),
        };

        let response = self.backend.generate_content(&request).await?;

        let reply = response
            .as_ref()
            .and_then(|r| r.candidates.first())
            .and_then(|c| c.content.clone());

        match reply {
            Some(mut reply) => {
                if reply.role.is_none() {
                    reply.role = Some(Role::Model.as_str().to_string());
                }
                self.history.push(outgoing);
                self.history.push(reply);
            }
            None => trace(self.verbose, "Response had no content; history unchanged"),
        }

        Ok(response)
    }
}
