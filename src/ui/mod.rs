mod output;
mod transcript;

pub use output::{
    display_error, display_message, display_prompt, display_title, role_label, trace, warn,
};
pub use transcript::{TerminalTranscript, Transcript};
