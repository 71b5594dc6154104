use crate::log::appender::LogAppender;
use crate::log::formatter::LogFormatter;
use crate::log::level::LogLevel;
use crate::log::log_record::LogRecord;
use anyhow::Result;
use std::sync::Arc;

/// 一路输出：格式化器 + 输出器
#[derive(Clone)]
pub struct Handler {
    pub formatter: Arc<dyn LogFormatter>,
    pub appender: Arc<dyn LogAppender>,
}

impl Handler {
    pub fn new(formatter: Arc<dyn LogFormatter>, appender: Arc<dyn LogAppender>) -> Self {
        Self {
            formatter,
            appender,
        }
    }

    pub fn write(&self, record: &LogRecord) -> Result<()> {
        let line = self.formatter.format(record)?;
        self.appender.append(&line)
    }
}

/// 节点进入 Live 状态后持有的处理器集合
///
/// 子节点与父节点共享同一组 formatter/appender，clone 只增加引用计数。
#[derive(Clone, Default)]
pub struct HandlerSet {
    pub console: Option<Handler>,
    pub file: Option<Handler>,
}

impl HandlerSet {
    pub fn new(console: Option<Handler>, file: Option<Handler>) -> Self {
        Self { console, file }
    }

    /// 按控制台、文件各自的阈值分别判断是否输出
    ///
    /// 两路都会尝试，返回遇到的第一个错误。
    pub fn dispatch(
        &self,
        record: &LogRecord,
        console_level: LogLevel,
        file_level: LogLevel,
    ) -> Result<()> {
        let mut result = Ok(());

        if let Some(console) = &self.console {
            if record.level >= console_level {
                result = console.write(record);
            }
        }

        if let Some(file) = &self.file {
            if record.level >= file_level {
                let written = file.write(record);
                if result.is_ok() {
                    result = written;
                }
            }
        }

        result
    }

    pub fn flush(&self) -> Result<()> {
        if let Some(console) = &self.console {
            console.appender.flush()?;
        }
        if let Some(file) = &self.file {
            file.appender.flush()?;
        }
        Ok(())
    }
}
