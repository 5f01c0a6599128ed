use crate::api::{Content, ModelBackend};
use crate::chat::ChatSession;
use crate::dispatch::handle_response;
use crate::error::Result;
use crate::flights::FlightService;
use crate::models::{Message, MessageLog};
use crate::ui::{trace, warn, Transcript};
use uuid::Uuid;

/// State of one user's chat: the model session and the message log.
pub struct Conversation<B> {
    id: Uuid,
    session: ChatSession<B>,
    messages: MessageLog,
}

impl<B: ModelBackend> Conversation<B> {
    pub fn new(session: ChatSession<B>) -> Self {
        Self {
            id: Uuid::new_v4(),
            session,
            messages: MessageLog::new(),
        }
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn session(&self) -> &ChatSession<B> {
        &self.session
    }

    /// Rebuild the model's working history from the log and redraw the
    /// visible part of the log.
    pub fn replay(&mut self, transcript: &mut dyn Transcript) -> Result<()> {
        let history: Vec<Content> = self.messages.iter().map(Content::from).collect();
        self.session.replace_history(history);

        transcript.begin_replay()?;
        for message in self.messages.visible() {
            transcript.show(message)?;
        }
        transcript.end_replay()?;
        Ok(())
    }

    /// Send `query`, resolve the response and record the exchange.
    ///
    /// Returns the reply shown to the user, or `None` when the turn produced
    /// nothing; in that case the log is left as it was. A logged turn always
    /// adds the query and the reply together.
    pub async fn run_turn<F>(
        &mut self,
        flights: &F,
        transcript: &mut dyn Transcript,
        query: &str,
    ) -> Result<Option<String>>
    where
        F: FlightService + ?Sized,
    {
        if query.trim().is_empty() {
            return Ok(None);
        }

        trace(
            self.session.verbose(),
            format!("[{}] turn {}", self.id, self.messages.len() / 2 + 1),
        );

        let Some(response) = self.session.send_text(query).await? else {
            warn("response not created.");
            return Ok(None);
        };

        let outcome = handle_response(&mut self.session, flights, Some(response)).await?;
        let Some(output) = outcome.into_text() else {
            trace(self.session.verbose(), "Turn produced no output");
            return Ok(None);
        };

        let reply = Message::model(output.clone());
        if !self
            .messages
            .push_exchange(Message::user(query), reply.clone())
        {
            warn("Blank reply; turn not recorded");
            return Ok(None);
        }
        transcript.show(&reply)?;

        Ok(Some(output))
    }
}
