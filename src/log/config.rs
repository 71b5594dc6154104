use crate::cfg::TypeOptions;
use crate::log::level::LevelValue;
use anyhow::Result;
use garde::Validate;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::path::{Path, PathBuf};

/// 默认的初始化公告模板
pub const DEFAULT_ANNOUNCEMENT_TEMPLATE: &str =
    "Logger {name} started at {time_started} (parent: {parent})";

/// 默认日志文件名
pub const DEFAULT_FILE_NAME: &str = "app.log";

/// LoggerNode 构造配置
///
/// 未出现的字段取默认值：控制台 info、文件 debug、文件名 `app.log`。
#[derive(Debug, Clone, Deserialize, SmartDefault, Validate)]
#[serde(default)]
pub struct LoggerNodeConfig {
    /// logger 名称，同一注册表内唯一
    #[garde(length(min = 1), pattern(r"^\S+$"))]
    pub name: String,

    /// 控制台级别（符号名或数值）
    #[default(LevelValue::Symbolic("info".to_string()))]
    #[garde(skip)]
    pub console_level: LevelValue,

    /// 文件级别（符号名或数值）
    #[default(LevelValue::Symbolic("debug".to_string()))]
    #[garde(skip)]
    pub file_level: LevelValue,

    /// 日志文件名，`file_path` 未指定时放在默认日志目录下
    #[default = "app.log"]
    #[garde(length(min = 1))]
    pub file_name: String,

    /// 日志文件完整路径，优先于 `file_name`
    #[garde(skip)]
    pub file_path: Option<PathBuf>,

    /// 完全关闭文件输出
    #[default = false]
    #[garde(skip)]
    pub no_file_logging: bool,

    /// 父 logger 名称，必须已在同一注册表中存在
    #[garde(skip)]
    pub parent: Option<String>,

    /// 创建时立即发出初始化公告（启动前进入缓冲）
    #[default = false]
    #[garde(skip)]
    pub announce_on_init: bool,

    /// 公告模板，支持 `{name}`、`{time_started}`、`{parent}`
    #[default(DEFAULT_ANNOUNCEMENT_TEMPLATE.to_string())]
    #[garde(skip)]
    pub init_announcement_template: String,

    /// 公告使用的级别
    #[default(LevelValue::Symbolic("info".to_string()))]
    #[garde(skip)]
    pub announcement_level: LevelValue,

    /// 创建后立即 start
    #[default = false]
    #[garde(skip)]
    pub auto_start: bool,

    /// 控制台格式化器
    #[default(TypeOptions::of("ConsoleFormatter"))]
    #[garde(skip)]
    pub console_formatter: TypeOptions,

    /// 文件格式化器
    #[default(TypeOptions::of("FileFormatter"))]
    #[garde(skip)]
    pub file_formatter: TypeOptions,

    /// 控制台输出器
    #[default(TypeOptions::of("ConsoleAppender"))]
    #[garde(skip)]
    pub console_appender: TypeOptions,
}

impl LoggerNodeConfig {
    /// 只指定名称，其余取默认值
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// 解析出的日志文件路径
    pub fn resolve_file_path(&self, default_dir: &Path) -> PathBuf {
        match &self.file_path {
            Some(path) => path.clone(),
            None => default_dir.join(&self.file_name),
        }
    }
}

/// 注册表配置：一次性描述整棵 logger 树
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggerRegistryConfig {
    /// 默认日志目录，未指定时使用 [`default_log_dir`]
    pub default_log_dir: Option<PathBuf>,

    /// 各个 logger，父节点可以出现在子节点之后
    pub loggers: Vec<LoggerNodeConfig>,
}

impl LoggerRegistryConfig {
    /// 从 JSON5 字符串加载
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(json5::from_str(json_str)?)
    }

    /// 从 YAML 字符串加载
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// 从 TOML 字符串加载
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// 默认日志目录：`<data_local_dir>/logtree/logs`，取不到时退回系统临时目录
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("logtree")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::level::LogLevel;

    #[test]
    fn test_default_config() {
        let config = LoggerNodeConfig::named("App");
        assert_eq!(config.console_level.resolve().unwrap(), LogLevel::Info);
        assert_eq!(config.file_level.resolve().unwrap(), LogLevel::Debug);
        assert_eq!(config.file_name, DEFAULT_FILE_NAME);
        assert!(!config.no_file_logging);
        assert!(!config.auto_start);
        assert_eq!(config.console_formatter.type_name, "ConsoleFormatter");
        assert_eq!(config.file_formatter.type_name, "FileFormatter");
        assert_eq!(config.console_appender.type_name, "ConsoleAppender");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_name() {
        assert!(LoggerNodeConfig::named("").validate().is_err());
        assert!(LoggerNodeConfig::named("my app").validate().is_err());
        assert!(LoggerNodeConfig::named("App.db:query").validate().is_ok());
    }

    #[test]
    fn test_resolve_file_path() {
        let mut config = LoggerNodeConfig::named("App");
        assert_eq!(
            config.resolve_file_path(Path::new("/var/log/app")),
            PathBuf::from("/var/log/app/app.log")
        );

        config.file_path = Some(PathBuf::from("/tmp/custom.log"));
        assert_eq!(
            config.resolve_file_path(Path::new("/var/log/app")),
            PathBuf::from("/tmp/custom.log")
        );
    }

    #[test]
    fn test_registry_config_from_json() -> Result<()> {
        let config = LoggerRegistryConfig::from_json(
            r#"
            {
                default_log_dir: "/tmp/logs",
                loggers: [
                    { name: "App", console_level: "warning", file_level: "DEBUG" },
                    { name: "App.db", parent: "App", no_file_logging: true },
                ],
            }
            "#,
        )?;

        assert_eq!(config.default_log_dir, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(config.loggers.len(), 2);
        assert_eq!(config.loggers[0].console_level.resolve()?, LogLevel::Warning);
        assert_eq!(config.loggers[0].file_level.resolve()?, LogLevel::Debug);
        assert_eq!(config.loggers[1].parent.as_deref(), Some("App"));
        assert_eq!(config.loggers[1].file_name, "app.log");
        Ok(())
    }

    #[test]
    fn test_registry_config_from_yaml_and_toml() -> Result<()> {
        let yaml = LoggerRegistryConfig::from_yaml(
            r#"
loggers:
  - name: Service
    console_level: error
    console_formatter:
      type: JsonFormatter
"#,
        )?;
        assert_eq!(yaml.loggers[0].console_formatter.type_name, "JsonFormatter");

        let toml = LoggerRegistryConfig::from_toml(
            r#"
[[loggers]]
name = "Worker"
auto_start = true
file_level = "internal"
"#,
        )?;
        assert!(toml.loggers[0].auto_start);
        assert_eq!(toml.loggers[0].file_level.resolve()?, LogLevel::Internal);
        Ok(())
    }

    #[test]
    fn test_default_log_dir() {
        assert!(default_log_dir().ends_with("logtree/logs"));
    }
}
