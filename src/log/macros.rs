//! 日志宏
//!
//! 第一个参数是 logger 节点，其余参数同 `format!`。调用位置会被记录到日志中。
//!
//! ```ignore
//! use logtree::info;
//!
//! info!(node, "listening on {}", addr)?;
//! ```

/// 以指定级别记录日志
#[macro_export]
macro_rules! log_at {
    ($node:expr, $level:expr, $($arg:tt)+) => {
        $node.log($level, format!($($arg)+))
    };
}

/// 记录 INTERNAL 级别日志
#[macro_export]
macro_rules! internal {
    ($node:expr, $($arg:tt)+) => {
        $crate::log_at!($node, $crate::log::LogLevel::Internal, $($arg)+)
    };
}

/// 记录 DEBUG 级别日志
#[macro_export]
macro_rules! debug {
    ($node:expr, $($arg:tt)+) => {
        $crate::log_at!($node, $crate::log::LogLevel::Debug, $($arg)+)
    };
}

/// 记录 INFO 级别日志
#[macro_export]
macro_rules! info {
    ($node:expr, $($arg:tt)+) => {
        $crate::log_at!($node, $crate::log::LogLevel::Info, $($arg)+)
    };
}

/// 记录 WARNING 级别日志
#[macro_export]
macro_rules! warning {
    ($node:expr, $($arg:tt)+) => {
        $crate::log_at!($node, $crate::log::LogLevel::Warning, $($arg)+)
    };
}

/// 记录 ERROR 级别日志
#[macro_export]
macro_rules! error {
    ($node:expr, $($arg:tt)+) => {
        $crate::log_at!($node, $crate::log::LogLevel::Error, $($arg)+)
    };
}

/// 记录 CRITICAL 级别日志
#[macro_export]
macro_rules! critical {
    ($node:expr, $($arg:tt)+) => {
        $crate::log_at!($node, $crate::log::LogLevel::Critical, $($arg)+)
    };
}
