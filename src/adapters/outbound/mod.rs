pub mod filesystem;
pub mod formatters;
