// Shared utilities

pub mod error;
pub mod json_format;
pub mod logging;
pub mod validation;
