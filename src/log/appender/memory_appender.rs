use crate::log::appender::LogAppender;
use anyhow::Result;
use std::sync::{Arc, Mutex, PoisonError};

/// 内存输出器
///
/// 把每一行保存在共享的 Vec 中，clone 出的句柄共享同一份内容，
/// 用于测试或在进程内收集日志。
#[derive(Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前已写入的全部行
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 是否有任意一行包含 `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|line| line.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl LogAppender for MemoryAppender {
    fn append(&self, formatted_message: &str) -> Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(formatted_message.to_string());
        Ok(())
    }
}
