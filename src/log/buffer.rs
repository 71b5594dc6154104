use crate::log::log_record::LogRecord;

/// 启动前的日志缓冲
///
/// 在处理器挂载之前按到达顺序保存全部记录，不做任何过滤；
/// `drain` 之后缓冲区为空，记录由调用方按当时的级别回放。
#[derive(Debug, Default)]
pub struct BufferingSink {
    records: Vec<LogRecord>,
}

impl BufferingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: LogRecord) {
        self.records.push(record);
    }

    /// 取出全部记录（保持到达顺序）
    pub fn drain(&mut self) -> Vec<LogRecord> {
        std::mem::take(&mut self.records)
    }

    /// 当前缓冲的记录（不取出）
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
