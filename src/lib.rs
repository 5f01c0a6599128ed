pub mod api;
pub mod app;
pub mod chat;
pub mod cli;
pub mod config;
pub mod conversation;
pub mod dispatch;
pub mod error;
pub mod flights;
pub mod models;
pub mod tools;
pub mod ui;

pub use app::App;
pub use chat::ChatSession;
pub use conversation::Conversation;
pub use dispatch::{handle_response, DispatchOutcome};
pub use error::{FlightsError, Result};
