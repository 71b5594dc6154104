//! logtree - 层级化日志门面
//!
//! 命名的 logger 节点组成一棵树，每个节点有独立的控制台和文件级别。
//! 节点在输出目标就绪之前就可以使用：启动前的日志进入缓冲，`start` 时按当时的级别回放。
//!
//! ## 模块
//!
//! - **cfg**: 组件配置（`TypeOptions` 与按 trait 划分的注册表）
//! - **log**: 级别、节点、注册表、格式化器与输出器
//!
//! ## 示例
//!
//! ```ignore
//! use logtree::{LoggerNodeConfig, LoggerRegistry};
//!
//! let registry = LoggerRegistry::new();
//! let app = registry.get_or_create(LoggerNodeConfig::named("App"))?;
//! app.debug("buffered until start")?;
//! app.start()?;
//!
//! let db = app.get_child("db")?; // App.db
//! db.info("connected")?;
//! ```

pub mod cfg;
pub mod log;

// 重新导出主要的公共 API
pub use cfg::{create_trait_from_type_options, register_trait, TypeOptions};

pub use log::{
    global_registry, to_numeric, to_symbolic, ChildKind, ChildMatch, ChildOptions, FindOptions,
    LevelValue, LogAppender, LogBridge, LogError, LogFormatter, LogLevel, LogRecord, Loggable,
    LoggerNode, LoggerNodeConfig, LoggerRegistry, LoggerRegistryConfig,
};
