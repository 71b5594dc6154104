use crate::log::level::LogLevel;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::panic::Location;

/// 日志记录
///
/// 在缓冲阶段原样保存，回放时才做级别过滤和格式化。
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// 日志级别
    pub level: LogLevel,
    /// 日志消息
    pub message: String,
    /// 产生该记录的 logger 名称
    pub logger: String,
    /// 时间戳（本地时间）
    pub timestamp: DateTime<Local>,
    /// 源文件路径
    pub file: String,
    /// 行号
    pub line: u32,
    /// 线程 ID（已缓存的字符串表示）
    pub thread_id: String,
}

impl LogRecord {
    /// 以调用位置创建记录
    #[track_caller]
    pub fn new(level: LogLevel, logger: impl Into<String>, message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self::at(level, logger, message, location.file(), location.line())
    }

    /// 以显式的文件和行号创建记录
    pub fn at(
        level: LogLevel,
        logger: impl Into<String>,
        message: impl Into<String>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            logger: logger.into(),
            timestamp: Local::now(),
            file: file.into(),
            line,
            thread_id: format!("{:?}", std::thread::current().id()),
        }
    }

    /// 源文件名（去掉目录部分）
    pub fn file_name(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file.as_str())
    }
}
