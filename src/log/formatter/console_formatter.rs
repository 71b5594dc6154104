use crate::log::formatter::LogFormatter;
use crate::log::level::LogLevel;
use crate::log::log_record::LogRecord;
use anyhow::Result;
use colored::{ColoredString, Colorize};
use serde::Deserialize;
use smart_default::SmartDefault;
use std::fmt::Write;

/// ConsoleFormatter 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ConsoleFormatterConfig {
    /// 是否启用颜色输出
    #[default = true]
    pub colored: bool,

    /// 是否输出时间
    #[default = true]
    pub show_time: bool,

    /// 是否输出级别
    #[default = true]
    pub show_level: bool,

    /// 是否在行尾输出 `file:line`
    #[default = false]
    pub show_location: bool,

    /// 时间格式（chrono strftime）
    #[default = "%H:%M:%S"]
    pub time_format: String,
}

/// 控制台格式化器
///
/// 核心部分固定为 `[<logger>] <message>`，时间、级别、位置可选。
pub struct ConsoleFormatter {
    config: ConsoleFormatterConfig,
}

impl ConsoleFormatter {
    pub fn new(config: ConsoleFormatterConfig) -> Self {
        Self { config }
    }

    fn paint_level(&self, level: LogLevel) -> ColoredString {
        let text = format!("{:<8}", level.to_string());
        if !self.config.colored {
            return text.normal();
        }
        match level {
            LogLevel::Critical => text.red().bold(),
            LogLevel::Error => text.red(),
            LogLevel::Warning => text.yellow(),
            LogLevel::Info => text.green(),
            LogLevel::Debug => text.cyan(),
            LogLevel::Internal => text.white().dimmed(),
        }
    }
}

impl LogFormatter for ConsoleFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let mut result = String::with_capacity(32 + record.logger.len() + record.message.len());

        if self.config.show_time {
            let time = record.timestamp.format(&self.config.time_format).to_string();
            if self.config.colored {
                write!(result, "{} ", time.dimmed())?;
            } else {
                write!(result, "{} ", time)?;
            }
        }

        if self.config.show_level {
            write!(result, "{} ", self.paint_level(record.level))?;
        }

        write!(result, "[{}] {}", record.logger, record.message)?;

        if self.config.show_location {
            let location = format!("{}:{}", record.file_name(), record.line);
            if self.config.colored {
                write!(result, " {}", location.dimmed())?;
            } else {
                write!(result, " {}", location)?;
            }
        }

        Ok(result)
    }
}

crate::impl_from!(ConsoleFormatterConfig => ConsoleFormatter);
crate::impl_box_from!(ConsoleFormatter => dyn LogFormatter);
