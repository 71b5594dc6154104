use crate::log::formatter::LogFormatter;
use crate::log::log_record::LogRecord;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;

/// 默认时间格式，形如 `2025-01-19 12:34:56,789`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// FileFormatter 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct FileFormatterConfig {
    /// 时间格式（chrono strftime）
    #[default(DEFAULT_TIMESTAMP_FORMAT.to_string())]
    pub timestamp_format: String,
}

/// 文件格式化器
///
/// `<timestamp> - [<logger>] - <LEVEL> - <message> |-| <file>:<line>`
pub struct FileFormatter {
    config: FileFormatterConfig,
}

impl FileFormatter {
    pub fn new(config: FileFormatterConfig) -> Self {
        Self { config }
    }
}

impl LogFormatter for FileFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        Ok(format!(
            "{} - [{}] - {} - {} |-| {}:{}",
            record.timestamp.format(&self.config.timestamp_format),
            record.logger,
            record.level,
            record.message,
            record.file_name(),
            record.line
        ))
    }
}

crate::impl_from!(FileFormatterConfig => FileFormatter);
crate::impl_box_from!(FileFormatter => dyn LogFormatter);
