pub mod json_formatter;
pub mod text_formatter;

pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;
