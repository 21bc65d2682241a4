// create-ts - TypeScript project scaffolder
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::template::PackageManifest;
pub use services::prompter::Prompter;
pub use services::scaffolder::{ask_project_location, create_project, scaffold, ScaffoldReport};
pub use utils::error::{PromptError, ScaffoldError};
pub use utils::validation::{resolve_location, ProjectLocation};
