mod console_appender;
mod core;
mod file_appender;
mod memory_appender;
mod registry;

pub use console_appender::{ConsoleAppender, ConsoleAppenderConfig, Target};
pub use core::LogAppender;
pub use file_appender::FileAppender;
pub use memory_appender::MemoryAppender;
pub use registry::{create_appender_from_options, register_appenders, NullAppender, NullAppenderConfig};
