use crate::cfg::{
    create_trait_from_type_options, is_registered, register_trait, registered_names, TypeOptions,
};
use crate::log::appender::{
    console_appender::{ConsoleAppender, ConsoleAppenderConfig},
    LogAppender,
};
use anyhow::{bail, Result};
use serde::Deserialize;

/// NullAppender 配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NullAppenderConfig {}

/// 丢弃所有输出，用于关闭某一路输出
pub struct NullAppender {}

impl NullAppender {
    pub fn new(_: NullAppenderConfig) -> Self {
        Self {}
    }
}

impl LogAppender for NullAppender {
    fn append(&self, _: &str) -> Result<()> {
        Ok(())
    }
}

crate::impl_from!(NullAppenderConfig => NullAppender);
crate::impl_box_from!(NullAppender => dyn LogAppender);

/// 注册所有可通过配置创建的 Appender
///
/// FileAppender 的打开可能失败，由 logger 节点直接创建，不走注册表。
pub fn register_appenders() -> Result<()> {
    register_trait::<ConsoleAppender, dyn LogAppender, ConsoleAppenderConfig>("ConsoleAppender")?;
    register_trait::<NullAppender, dyn LogAppender, NullAppenderConfig>("NullAppender")?;
    Ok(())
}

/// 从 TypeOptions 创建 Appender
pub fn create_appender_from_options(options: &TypeOptions) -> Result<Box<dyn LogAppender>> {
    if !is_registered::<dyn LogAppender>(&options.type_name) {
        bail!(
            "unknown appender type '{}', available: {}",
            options.type_name,
            registered_names::<dyn LogAppender>().join(", ")
        );
    }
    create_trait_from_type_options(options)
}
