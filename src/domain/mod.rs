pub mod configuration;
pub mod content;
pub mod error;
pub mod package;
pub mod request;

pub use configuration::{AppConfig, DefaultsConfig, RemoteConfig};
pub use error::AppError;
pub use package::{ContentPackage, PlatformCopyMap};
pub use request::GenerationRequest;
