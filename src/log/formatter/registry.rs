use crate::cfg::{
    create_trait_from_type_options, is_registered, register_trait, registered_names, TypeOptions,
};
use crate::log::formatter::{
    console_formatter::{ConsoleFormatter, ConsoleFormatterConfig},
    file_formatter::{FileFormatter, FileFormatterConfig},
    json_formatter::{JsonFormatter, JsonFormatterConfig},
    LogFormatter,
};
use anyhow::{bail, Result};

/// 注册所有 Formatter 实现
pub fn register_formatters() -> Result<()> {
    register_trait::<ConsoleFormatter, dyn LogFormatter, ConsoleFormatterConfig>("ConsoleFormatter")?;
    register_trait::<FileFormatter, dyn LogFormatter, FileFormatterConfig>("FileFormatter")?;
    register_trait::<JsonFormatter, dyn LogFormatter, JsonFormatterConfig>("JsonFormatter")?;
    Ok(())
}

/// 从 TypeOptions 创建 Formatter
pub fn create_formatter_from_options(options: &TypeOptions) -> Result<Box<dyn LogFormatter>> {
    if !is_registered::<dyn LogFormatter>(&options.type_name) {
        bail!(
            "unknown formatter type '{}', available: {}",
            options.type_name,
            registered_names::<dyn LogFormatter>().join(", ")
        );
    }
    create_trait_from_type_options(options)
}
