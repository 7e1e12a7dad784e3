//! Local content pipeline stages.

pub mod copy;
pub mod ideation;
pub mod image_prompt;
pub mod schedule;

pub use copy::{CopyVariants, Platform, compose, variants};
pub use ideation::{IdeationResult, ideate};
pub use image_prompt::image_prompt;
pub use schedule::{resolve_timezone, schedule, schedule_at};
