use crate::log::formatter::LogFormatter;
use crate::log::log_record::LogRecord;
use anyhow::Result;
use serde::Deserialize;

/// JsonFormatter 配置（保留扩展性）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JsonFormatterConfig {}

/// JSON 格式化器，每条记录一行 JSON
pub struct JsonFormatter {}

impl JsonFormatter {
    pub fn new(_: JsonFormatterConfig) -> Self {
        Self {}
    }
}

impl LogFormatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        Ok(serde_json::to_string(record)?)
    }
}

crate::impl_from!(JsonFormatterConfig => JsonFormatter);
crate::impl_box_from!(JsonFormatter => dyn LogFormatter);
