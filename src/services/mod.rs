pub mod instruction_prompt;
pub mod remote_generator;
pub mod response_normalizer;

pub use remote_generator::{RemoteAttempt, RemoteGenerator};
pub use response_normalizer::{RemoteFragment, normalize_response};
