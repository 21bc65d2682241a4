// Models module for data structures
pub mod template;
