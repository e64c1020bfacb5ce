//! Boundary to the generative text service.

mod openai;
pub mod prompt;

pub use openai::OpenAiClient;

use std::sync::Arc;

/// Failures raised while talking to the text service. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingCredentials,
    #[error("text service request timed out after {secs}s")]
    Timeout { secs: u64 },
    #[error("text service transport failure: {0}")]
    Transport(String),
    #[error("text service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unable to decode text service response: {0}")]
    Decode(String),
}

/// Anything that turns a prompt into freeform text. Replies carry no structural guarantee.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}
