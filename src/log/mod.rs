pub mod announcement;
pub mod appender;
pub mod bridge;
pub mod buffer;
pub mod config;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod level;
pub mod log_record;
pub mod loggable;
pub mod macros;
pub mod node;
pub mod registry;

pub use announcement::{Announcement, ROOT_PARENT_NAME};
pub use appender::{
    create_appender_from_options, register_appenders, ConsoleAppender, ConsoleAppenderConfig,
    FileAppender, LogAppender, MemoryAppender, NullAppender, NullAppenderConfig, Target,
};
pub use bridge::LogBridge;
pub use buffer::BufferingSink;
pub use config::{
    default_log_dir, LoggerNodeConfig, LoggerRegistryConfig, DEFAULT_ANNOUNCEMENT_TEMPLATE,
    DEFAULT_FILE_NAME,
};
pub use error::LogError;
pub use formatter::{
    create_formatter_from_options, register_formatters, ConsoleFormatter, ConsoleFormatterConfig,
    FileFormatter, FileFormatterConfig, JsonFormatter, JsonFormatterConfig, LogFormatter,
};
pub use handler::{Handler, HandlerSet};
pub use level::{to_numeric, to_symbolic, LevelValue, LogLevel, LEVELS};
pub use log_record::LogRecord;
pub use loggable::Loggable;
pub use node::{ChildKind, ChildMatch, ChildOptions, FindOptions, LoggerNode};
pub use registry::{global_registry, LoggerRegistry};
