mod console_formatter;
mod core;
mod file_formatter;
mod json_formatter;
mod registry;

pub use console_formatter::{ConsoleFormatter, ConsoleFormatterConfig};
pub use core::LogFormatter;
pub use file_formatter::{FileFormatter, FileFormatterConfig, DEFAULT_TIMESTAMP_FORMAT};
pub use json_formatter::{JsonFormatter, JsonFormatterConfig};
pub use registry::{create_formatter_from_options, register_formatters};
