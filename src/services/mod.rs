// Services module for business logic
pub mod prompter;
pub mod scaffolder;
