use thiserror::Error;

/// 日志树的统一错误类型
#[derive(Error, Debug)]
pub enum LogError {
    #[error("无效的日志级别: {0}")]
    InvalidLevel(String),

    #[error("子 logger 已存在: {0}")]
    DuplicateChild(String),

    #[error("拒绝访问: {0}")]
    PermissionDenied(String),

    #[error("无法确定父 logger: {0}")]
    AmbiguousParent(String),

    #[error("配置错误: {0}")]
    InvalidConfig(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<garde::Report> for LogError {
    fn from(report: garde::Report) -> Self {
        LogError::InvalidConfig(report.to_string())
    }
}
