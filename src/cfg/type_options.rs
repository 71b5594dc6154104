use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// 组件描述：类型名 + 该类型的构造参数
///
/// ```json5
/// { type: "ConsoleFormatter", options: { colored: false } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeOptions {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default = "empty_options")]
    pub options: JsonValue,
}

fn empty_options() -> JsonValue {
    JsonValue::Object(Default::default())
}

impl TypeOptions {
    /// 只指定类型名，options 为空对象
    pub fn of(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            options: empty_options(),
        }
    }

    /// 指定类型名和 options
    pub fn with_options(type_name: impl Into<String>, options: JsonValue) -> Self {
        Self {
            type_name: type_name.into(),
            options,
        }
    }

    /// 从 JSON 字符串创建（支持 JSON5：注释、尾随逗号、未加引号的键）
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(json5::from_str(json_str)?)
    }

    /// 从 YAML 字符串创建
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// 从 TOML 字符串创建
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json5() -> Result<()> {
        let opts = TypeOptions::from_json(
            r#"
            {
                // 控制台格式化器
                type: "ConsoleFormatter",
                options: { colored: false, },
            }
            "#,
        )?;

        assert_eq!(opts.type_name, "ConsoleFormatter");
        assert_eq!(opts.options["colored"], false);
        Ok(())
    }

    #[test]
    fn test_from_yaml() -> Result<()> {
        let opts = TypeOptions::from_yaml(
            r#"
type: FileAppender
options:
  file_path: /tmp/app.log
"#,
        )?;

        assert_eq!(opts.type_name, "FileAppender");
        assert_eq!(opts.options["file_path"], "/tmp/app.log");
        Ok(())
    }

    #[test]
    fn test_from_toml() -> Result<()> {
        let opts = TypeOptions::from_toml(
            r#"
type = "ConsoleAppender"

[options]
target = "stderr"
"#,
        )?;

        assert_eq!(
            opts,
            TypeOptions::with_options("ConsoleAppender", json!({"target": "stderr"}))
        );
        Ok(())
    }

    #[test]
    fn test_missing_options_defaults_to_empty_object() -> Result<()> {
        let opts = TypeOptions::from_json(r#"{ "type": "JsonFormatter" }"#)?;
        assert_eq!(opts, TypeOptions::of("JsonFormatter"));
        assert!(opts.options.as_object().unwrap().is_empty());
        Ok(())
    }

    #[test]
    fn test_to_json_roundtrip() -> Result<()> {
        let opts = TypeOptions::with_options("FileFormatter", json!({"timestamp_format": "%H:%M"}));
        let parsed = TypeOptions::from_json(&opts.to_json()?)?;
        assert_eq!(parsed, opts);
        Ok(())
    }

    #[test]
    fn test_invalid_documents() {
        assert!(TypeOptions::from_json("{ type: ").is_err());
        assert!(TypeOptions::from_yaml("options: [").is_err());
    }
}
