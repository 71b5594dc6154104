use crate::log::appender::LogAppender;
use anyhow::Result;
use serde::Deserialize;
use std::io::{self, Write};

/// 输出目标
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
}

/// ConsoleAppender 配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConsoleAppenderConfig {
    /// 输出到 stdout 还是 stderr
    pub target: Target,
}

/// 终端输出器
pub struct ConsoleAppender {
    config: ConsoleAppenderConfig,
}

impl ConsoleAppender {
    pub fn new(config: ConsoleAppenderConfig) -> Self {
        Self { config }
    }

    pub fn target(&self) -> Target {
        self.config.target
    }
}

impl LogAppender for ConsoleAppender {
    fn append(&self, formatted_message: &str) -> Result<()> {
        match self.config.target {
            Target::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", formatted_message)?;
                stdout.flush()?;
            }
            Target::Stderr => {
                let mut stderr = io::stderr().lock();
                writeln!(stderr, "{}", formatted_message)?;
            }
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.config.target {
            Target::Stdout => io::stdout().flush()?,
            Target::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}

crate::impl_from!(ConsoleAppenderConfig => ConsoleAppender);
crate::impl_box_from!(ConsoleAppender => dyn LogAppender);
