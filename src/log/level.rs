use crate::log::error::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 日志级别
///
/// 数值与 Python `logging` 的约定一致，`Internal` 低于 `Debug`，
/// 用于本库自身的诊断输出，默认不可见。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// 内部诊断
    Internal = 5,
    /// 调试信息
    Debug = 10,
    /// 一般信息
    Info = 20,
    /// 警告信息
    Warning = 30,
    /// 错误信息
    Error = 40,
    /// 严重错误（`fatal` 是它的别名）
    Critical = 50,
}

/// 全部级别，按严重程度升序
pub const LEVELS: [LogLevel; 6] = [
    LogLevel::Internal,
    LogLevel::Debug,
    LogLevel::Info,
    LogLevel::Warning,
    LogLevel::Error,
    LogLevel::Critical,
];

impl LogLevel {
    /// 数值形式
    pub fn as_numeric(self) -> u8 {
        self as u8
    }

    /// 小写的符号名
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Internal => "internal",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }

    /// 从数值还原，只接受固定集合中的值
    pub fn from_numeric(value: u8) -> Result<Self, LogError> {
        LEVELS
            .iter()
            .copied()
            .find(|level| level.as_numeric() == value)
            .ok_or_else(|| LogError::InvalidLevel(value.to_string()))
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "internal" => Ok(LogLevel::Internal),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "critical" | "fatal" => Ok(LogLevel::Critical),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Internal => write!(f, "INTERNAL"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// 配置和 API 中出现的级别：符号名或数值
///
/// 在真正使用前通过 [`LevelValue::resolve`] 校验。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LevelValue {
    Numeric(u8),
    Symbolic(String),
}

impl LevelValue {
    pub fn resolve(&self) -> Result<LogLevel, LogError> {
        match self {
            LevelValue::Numeric(n) => LogLevel::from_numeric(*n),
            LevelValue::Symbolic(s) => s.parse(),
        }
    }
}

impl From<LogLevel> for LevelValue {
    fn from(level: LogLevel) -> Self {
        LevelValue::Numeric(level.as_numeric())
    }
}

impl From<&str> for LevelValue {
    fn from(s: &str) -> Self {
        LevelValue::Symbolic(s.to_string())
    }
}

impl From<String> for LevelValue {
    fn from(s: String) -> Self {
        LevelValue::Symbolic(s)
    }
}

impl From<u8> for LevelValue {
    fn from(n: u8) -> Self {
        LevelValue::Numeric(n)
    }
}

/// 符号名或数值 -> 数值
pub fn to_numeric(value: impl Into<LevelValue>) -> Result<u8, LogError> {
    value.into().resolve().map(LogLevel::as_numeric)
}

/// 数值 -> 符号名
pub fn to_symbolic(value: u8) -> Result<&'static str, LogError> {
    LogLevel::from_numeric(value).map(LogLevel::as_str)
}
