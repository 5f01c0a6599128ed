use crate::api::ModelBackend;
use crate::conversation::Conversation;
use crate::error::Result;
use crate::flights::FlightService;
use crate::models::Message;
use crate::ui::{display_prompt, warn, Transcript};
use std::io::{self, BufRead, Write};

pub const APP_TITLE: &str = "Gemini Flights";

const EXIT_COMMANDS: [&str; 2] = ["quit", "exit"];

/// Prompt for the hidden first turn that sets up the assistant persona.
pub fn intro_prompt(reference_year: i32) -> String {
    format!(
        "Introduce yourself as a flights management assistant, ReX, powered by Google Gemini and designed to search/book flights. You use emojis to be interactive. For reference, the year for dates is {}",
        reference_year
    )
}

/// Interactive loop around one conversation.
pub struct App<B, F> {
    conversation: Conversation<B>,
    flights: F,
    reference_year: i32,
}

impl<B, F> App<B, F>
where
    B: ModelBackend,
    F: FlightService,
{
    pub fn new(conversation: Conversation<B>, flights: F, reference_year: i32) -> Self {
        Self {
            conversation,
            flights,
            reference_year,
        }
    }

    pub fn conversation(&self) -> &Conversation<B> {
        &self.conversation
    }

    /// One render cycle: replay the log, run the introduction if nothing has
    /// been said yet, then handle `input` if there is any.
    ///
    /// The introduction must be the first logged turn, so `input` is dropped
    /// when it fails.
    pub async fn render_cycle(
        &mut self,
        transcript: &mut dyn Transcript,
        input: Option<&str>,
    ) -> Result<()> {
        self.conversation.replay(transcript)?;

        if self.conversation.messages().is_empty() {
            let prompt = intro_prompt(self.reference_year);
            let intro = self
                .conversation
                .run_turn(&self.flights, transcript, &prompt)
                .await?;
            if intro.is_none() {
                if input.is_some() {
                    warn("Assistant is not ready yet; please send that again.");
                }
                return Ok(());
            }
        }

        if let Some(query) = input.map(str::trim).filter(|q| !q.is_empty()) {
            transcript.show(&Message::user(query))?;
            self.conversation
                .run_turn(&self.flights, transcript, query)
                .await?;
        }

        Ok(())
    }

    /// Read lines from `input` until end of input or an exit command.
    pub async fn run<R: BufRead>(
        &mut self,
        transcript: &mut dyn Transcript,
        mut input: R,
    ) -> Result<()> {
        self.render_cycle(transcript, None).await?;

        loop {
            display_prompt(APP_TITLE);
            io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                println!();
                break;
            }

            let line = line.trim();
            if EXIT_COMMANDS.iter().any(|c| line.eq_ignore_ascii_case(c)) {
                break;
            }
            if line.is_empty() {
                continue;
            }

            self.render_cycle(transcript, Some(line)).await?;
        }

        Ok(())
    }
}
