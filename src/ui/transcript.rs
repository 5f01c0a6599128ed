use super::output::{display_message, display_title};
use crate::models::Message;
use std::io::{self, Write};

/// Where chat messages are rendered.
///
/// A replay is `begin_replay`, one `show` per logged message, `end_replay`.
/// Messages shown outside a replay are live output of the current turn.
pub trait Transcript {
    fn begin_replay(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn end_replay(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show(&mut self, message: &Message) -> io::Result<()>;
}

/// Chat transcript on the terminal.
///
/// With `clear_screen` every replay wipes the screen and redraws the
/// conversation from the log. Without it the terminal scrollback already
/// holds everything shown live, so replays print nothing.
pub struct TerminalTranscript {
    title: String,
    clear_screen: bool,
    replaying: bool,
    titled: bool,
}

impl TerminalTranscript {
    pub fn new(title: impl Into<String>, clear_screen: bool) -> Self {
        Self {
            title: title.into(),
            clear_screen,
            replaying: false,
            titled: false,
        }
    }
}

impl Transcript for TerminalTranscript {
    fn begin_replay(&mut self) -> io::Result<()> {
        self.replaying = true;
        if self.clear_screen {
            print!("\x1b[2J\x1b[H");
            display_title(&self.title);
        } else if !self.titled {
            display_title(&self.title);
        }
        self.titled = true;
        Ok(())
    }

    fn end_replay(&mut self) -> io::Result<()> {
        self.replaying = false;
        io::stdout().flush()
    }

    fn show(&mut self, message: &Message) -> io::Result<()> {
        if self.replaying && !self.clear_screen {
            return Ok(());
        }
        display_message(message);
        io::stdout().flush()
    }
}

/// Collects messages in memory instead of printing them. A replay starts
/// from an empty list.
impl Transcript for Vec<Message> {
    fn begin_replay(&mut self) -> io::Result<()> {
        self.clear();
        Ok(())
    }

    fn show(&mut self, message: &Message) -> io::Result<()> {
        self.push(message.clone());
        Ok(())
    }
}
