pub mod http;
pub mod service;
pub mod types;

pub use http::HttpChatService;
pub use service::{ChatService, ServiceError};
pub use types::{ChatMessage, ChatReply, ChatRequest, Sender};
