use crate::log::error::LogError;
use crate::log::level::LogLevel;
use crate::log::log_record::LogRecord;
use crate::log::node::LoggerNode;
use crate::log::registry::LoggerRegistry;
use std::sync::Arc;

/// 把 `log` crate 的记录转发到 logger 树
///
/// 记录的 target 与注册表中的节点名相同时交给该节点，否则交给默认节点。
/// `Trace` 对应 internal 级别。
pub struct LogBridge {
    registry: LoggerRegistry,
    default: Arc<LoggerNode>,
}

impl LogBridge {
    pub fn new(registry: LoggerRegistry, default: Arc<LoggerNode>) -> Self {
        Self { registry, default }
    }

    /// 安装为全局 logger，一个进程只能成功一次
    pub fn install(self) -> Result<(), LogError> {
        ::log::set_boxed_logger(Box::new(self))
            .map_err(|e| LogError::InvalidConfig(e.to_string()))?;
        ::log::set_max_level(::log::LevelFilter::Trace);
        Ok(())
    }

    fn route(&self, target: &str) -> Arc<LoggerNode> {
        self.registry
            .get(target)
            .unwrap_or_else(|| self.default.clone())
    }
}

impl From<::log::Level> for LogLevel {
    fn from(level: ::log::Level) -> Self {
        match level {
            ::log::Level::Error => LogLevel::Error,
            ::log::Level::Warn => LogLevel::Warning,
            ::log::Level::Info => LogLevel::Info,
            ::log::Level::Debug => LogLevel::Debug,
            ::log::Level::Trace => LogLevel::Internal,
        }
    }
}

impl ::log::Log for LogBridge {
    fn enabled(&self, metadata: &::log::Metadata) -> bool {
        let node = self.route(metadata.target());
        let level = LogLevel::from(metadata.level());
        level >= node.console_level() || level >= node.file_level() || !node.is_started()
    }

    fn log(&self, record: &::log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let node = self.route(record.target());
        let _ = node.log_record(LogRecord::at(
            record.level().into(),
            node.name(),
            record.args().to_string(),
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
        ));
    }

    fn flush(&self) {
        let _ = self.default.flush();
    }
}
