pub mod env;
pub mod gemini;

pub use gemini::{ask, AskError, GenerateRequest, GenerateResponse};
