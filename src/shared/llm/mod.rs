pub mod client;
pub mod parser;
pub mod response;

pub use client::OpenAiClient;
pub use parser::parse_with_fallback;
pub use response::LlmResponse;
