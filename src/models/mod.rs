mod message;

pub use message::{Message, MessageLog, Role};
